use crate::config::Config;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::{config::Region, Client};
use std::error::Error;

/// Write-only view of the image bucket.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn put_object(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;
}

#[derive(Clone)]
pub struct S3Service {
    bucket: String,
    client: Client,
}

impl S3Service {
    pub async fn new(config: &Config) -> Self {
        let credentials = Credentials::new(
            config.s3_access_key.clone(),
            config.s3_secret_key.clone(),
            None,
            None,
            "static"
        );

        let region = Region::new(config.s3_region.clone());

        let shared_config = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .credentials_provider(credentials)
            .endpoint_url(config.s3_endpoint.clone())
            .load()
            .await;

        // R2 and MinIO expect path-style addressing on custom endpoints
        let s3_config_builder = aws_sdk_s3::config::Builder::from(&shared_config)
            .force_path_style(true);

        let client = Client::from_conf(s3_config_builder.build());

        Self {
            bucket: config.s3_bucket_name.clone(),
            client,
        }
    }
}

#[async_trait]
impl ObjectStorage for S3Service {
    async fn put_object(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let result = self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(data.into())
            .content_type(content_type)
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) => {
                // Keeps the source chain, so dispatch and timeout failures stay readable
                let err_msg = DisplayErrorContext(&e).to_string();
                tracing::error!("S3 Upload Error: {}", err_msg);
                Err(format!("S3 Upload Failed: {}", err_msg).into())
            }
        }
    }
}
