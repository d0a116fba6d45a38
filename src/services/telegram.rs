//! Alert delivery through the Telegram Bot API.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

pub const TELEGRAM_BASE_URL: &str = "https://api.telegram.org";

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("delivery rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait NotificationGateway: Send + Sync {
    async fn deliver(&self, message: &str, token: &str, chat_id: &str)
        -> Result<(), NotificationError>;
}

pub struct TelegramNotifier {
    base_url: String,
    client: reqwest::Client,
}

impl TelegramNotifier {
    pub fn new() -> Self {
        Self::with_base_url(TELEGRAM_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }
}

impl Default for TelegramNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationGateway for TelegramNotifier {
    async fn deliver(
        &self,
        message: &str,
        token: &str,
        chat_id: &str,
    ) -> Result<(), NotificationError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, token);
        let response = self
            .client
            .post(&url)
            .form(&[("chat_id", chat_id), ("text", message)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotificationError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!(chat_id, "telegram alert delivered");
        Ok(())
    }
}
