use crate::{Mailer, OutboundMail, ServiceResult};

use async_trait::async_trait;
use log::info;

/// Writes outgoing mail to the log instead of a relay.
#[derive(Debug, Clone)]
pub struct LogMailer {
    from: String,
}

impl LogMailer {
    pub fn new(from: impl Into<String>) -> Self {
        Self { from: from.into() }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, mail: OutboundMail) -> ServiceResult<()> {
        info!(
            "Mail from {} to {}: {} ({} bytes)",
            self.from,
            mail.to,
            mail.subject,
            mail.html.len()
        );
        Ok(())
    }
}
