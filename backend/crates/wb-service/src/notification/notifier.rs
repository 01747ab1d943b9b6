use crate::ServiceResult;

use async_trait::async_trait;

/// Out-of-band chat delivery (Slack-style incoming webhook or similar).
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, recipient_email: &str, message: &str) -> ServiceResult<()>;
}
