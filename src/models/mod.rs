pub mod application_model;
pub mod form_schema;
