use crate::{Notifier, ServiceResult};

use async_trait::async_trait;
use log::info;

/// Used when no webhook is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, recipient_email: &str, message: &str) -> ServiceResult<()> {
        info!("Notification for {}: {}", recipient_email, message);
        Ok(())
    }
}
