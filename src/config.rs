use std::env;
use std::sync::Arc;
use thiserror::Error;
use crate::models::form_schema::FormVariant;
use crate::services::s3_service::ObjectStorage;
use crate::services::slack_service::SlackService;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub form_variant: FormVariant,
    pub public_image_base_url: String,
    pub slack_webhook_url: String,
    pub s3_endpoint: String,
    pub s3_region: String,
    pub s3_access_key: String,
    pub s3_secret_key: String,
    pub s3_bucket_name: String,
}

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn ObjectStorage>,
    pub slack_service: SlackService,
}

impl Config {
    pub fn init() -> Result<Config, ConfigError> {
        let server_host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = parse_or("PORT", 8787)?;
        let form_variant = parse_or("FORM_VARIANT", FormVariant::Generic)?;

        let public_image_base_url = required("PUBLIC_IMAGE_BASE_URL")?;
        let slack_webhook_url = required("SLACK_WEBHOOK_URL")?;

        let s3_endpoint = required("S3_ENDPOINT")?;
        let s3_region = env::var("S3_REGION").unwrap_or_else(|_| "auto".to_string());
        let s3_access_key = required("S3_ACCESS_KEY")?;
        let s3_secret_key = required("S3_SECRET_KEY")?;
        let s3_bucket_name = required("S3_BUCKET_NAME")?;

        Ok(Config {
            server_host,
            server_port,
            form_variant,
            public_image_base_url,
            slack_webhook_url,
            s3_endpoint,
            s3_region,
            s3_access_key,
            s3_secret_key,
            s3_bucket_name,
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

fn parse_or<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => {
            tracing::info!("{} not set, using default", name);
            Ok(default)
        }
    }
}
