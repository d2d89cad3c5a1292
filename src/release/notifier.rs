//! Chat webhook notifier

#[cfg(test)]
use mockall::automock;

use reqwest::StatusCode;
use serde::Serialize;

use crate::release::error::NotifyError;

/// Trait for posting a message to a chat channel
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// Posts `text` once; no retries
    async fn notify(&self, text: &str) -> Result<(), NotifyError>;
}

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    text: &'a str,
}

/// Incoming webhook accepting `{"text": ...}` (Slack-compatible)
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(client: reqwest::Client, url: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(&self.url)
            .json(&WebhookPayload { text })
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Status { status, body });
        }

        Ok(())
    }
}
