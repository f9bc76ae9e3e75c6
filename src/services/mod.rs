pub mod application_service;
pub mod s3_service;
pub mod slack_service;
