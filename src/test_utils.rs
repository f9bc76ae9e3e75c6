use async_trait::async_trait;
use axum_test::TestServer;
use std::collections::HashMap;
use std::error::Error;
use std::sync::{Arc, Mutex};
use crate::config::{AppState, Config};
use crate::models::form_schema::FormVariant;
use crate::services::s3_service::ObjectStorage;
use crate::services::slack_service::SlackService;

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub content_type: String,
    pub data: Vec<u8>,
}

/// In-memory bucket. Clones share the same objects.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    objects: Arc<Mutex<HashMap<String, StoredObject>>>,
    failure: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bucket whose every write fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn get(&self, key: &str) -> Option<StoredObject> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    pub fn keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ObjectStorage for MemoryStorage {
    async fn put_object(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        if let Some(message) = &self.failure {
            return Err(message.clone().into());
        }

        self.objects.lock().unwrap().insert(
            key.to_string(),
            StoredObject {
                content_type: content_type.to_string(),
                data,
            },
        );
        Ok(())
    }
}

pub fn create_test_config(variant: FormVariant, webhook_url: &str, base_url: &str) -> Config {
    Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        form_variant: variant,
        public_image_base_url: base_url.to_string(),
        slack_webhook_url: webhook_url.to_string(),
        s3_endpoint: "http://localhost:9000".to_string(),
        s3_region: "auto".to_string(),
        s3_access_key: "test".to_string(),
        s3_secret_key: "test".to_string(),
        s3_bucket_name: "ad-images".to_string(),
    }
}

pub fn create_test_server(
    variant: FormVariant,
    webhook_url: &str,
    base_url: &str,
    storage: MemoryStorage,
) -> TestServer {
    let config = create_test_config(variant, webhook_url, base_url);
    let state = AppState {
        slack_service: SlackService::new(&config),
        storage: Arc::new(storage),
        config,
    };

    TestServer::new(crate::build_app(state)).unwrap()
}
