pub mod application_handler;
