//! Notifier adapters.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use tracing::info;
use vigil_core::{DomainError, Notifier, PresenceSource};

/// Notifier that POSTs a JSON message to a webhook.
///
/// Holds the presence source so the message carries the display name
/// learned from the most recent probe response.
pub struct WebhookNotifier {
    client: reqwest::Client,
    webhook_url: String,
    source: Arc<dyn PresenceSource>,
}

impl WebhookNotifier {
    pub fn new(
        client: reqwest::Client,
        webhook_url: String,
        source: Arc<dyn PresenceSource>,
    ) -> Self {
        Self {
            client,
            webhook_url,
            source,
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify_online(&self, at: DateTime<Utc>) -> Result<(), DomainError> {
        let text = format!(
            "{} came online ({} UTC)",
            self.source.display_name(),
            at.format("%H:%M")
        );

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&json!({
                "text": text,
                "timestamp": at.to_rfc3339(),
            }))
            .send()
            .await
            .map_err(|e| DomainError::Notify(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::Notify(format!(
                "Webhook returned HTTP {status}"
            )));
        }

        info!("Online notification delivered");
        Ok(())
    }
}

/// Fallback notifier that only writes to the log.
pub struct LogNotifier {
    source: Arc<dyn PresenceSource>,
}

impl LogNotifier {
    pub fn new(source: Arc<dyn PresenceSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify_online(&self, at: DateTime<Utc>) -> Result<(), DomainError> {
        info!(at = %at, "{} came online", self.source.display_name());
        Ok(())
    }
}
