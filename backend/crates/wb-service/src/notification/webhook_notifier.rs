use crate::{Notifier, ServiceError, ServiceResult};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde::Serialize;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
struct WebhookPayload<'a> {
    text: &'a str,
    email: &'a str,
}

/// Posts `{"text", "email"}` to an incoming-webhook URL.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>) -> ServiceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ServiceError::delivery(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, recipient_email: &str, message: &str) -> ServiceResult<()> {
        let response = self
            .client
            .post(&self.url)
            .json(&WebhookPayload {
                text: message,
                email: recipient_email,
            })
            .send()
            .await
            .map_err(|e| ServiceError::delivery(format!("Webhook request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::delivery(format!(
                "Webhook returned {}",
                status
            )));
        }

        debug!("Delivered webhook notification to {}", recipient_email);
        Ok(())
    }
}
