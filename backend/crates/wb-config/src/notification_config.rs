use crate::{ConfigError, ConfigErrorResult, DEFAULT_MAIL_FROM};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Slack-compatible incoming webhook. Notifications are only logged
    /// when unset.
    pub webhook_url: Option<String>,
    /// Sender address on outbound mail
    pub mail_from: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            mail_from: String::from(DEFAULT_MAIL_FROM),
        }
    }
}

impl NotificationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(url) = &self.webhook_url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(ConfigError::notification(format!(
                "notification.webhook_url must be an http(s) URL, got '{}'",
                url
            )));
        }

        if !self.mail_from.contains('@') {
            return Err(ConfigError::notification(
                "notification.mail_from must be an email address",
            ));
        }

        Ok(())
    }
}
