use crate::config::Config;
use crate::error::AppError;
use reqwest::Client;
use serde::Serialize;

#[derive(Serialize)]
struct SlackPayload<'a> {
    text: &'a str,
}

/// Incoming-webhook client for the team chat.
#[derive(Clone)]
pub struct SlackService {
    client: Client,
    webhook_url: String,
}

impl SlackService {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            webhook_url: config.slack_webhook_url.clone(),
        }
    }

    /// Posts `{"text": ...}` once. Any non-2xx answer is a failed notification.
    pub async fn send_message(&self, text: &str) -> Result<(), AppError> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(&SlackPayload { text })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Slack webhook request error: {}", e);
                AppError::Internal(e.to_string())
            })?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Slack webhook returned {}: {}", status, error_text);
            Err(AppError::NotificationFailed)
        }
    }
}
