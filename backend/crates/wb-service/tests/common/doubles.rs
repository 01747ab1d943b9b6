use wb_service::{Mailer, Notifier, OutboundMail, ServiceError, ServiceResult};

use std::sync::Mutex;

use async_trait::async_trait;

/// Captures every notification instead of delivering it.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, recipient_email: &str, message: &str) -> ServiceResult<()> {
        self.sent
            .lock()
            .unwrap()
            .push((recipient_email.to_string(), message.to_string()));
        Ok(())
    }
}

/// Always fails, for checking that delivery errors do not surface.
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify(&self, _recipient_email: &str, _message: &str) -> ServiceResult<()> {
        Err(ServiceError::delivery("webhook unreachable"))
    }
}

#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutboundMail>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<OutboundMail> {
        self.sent.lock().unwrap().clone()
    }

    /// Token from the link in the most recent mail.
    pub fn last_token(&self) -> Option<String> {
        let mail = self.sent().pop()?;
        let start = mail.html.find("token=")? + "token=".len();
        let token: String = mail.html[start..]
            .chars()
            .take_while(|c| *c != '"' && *c != '&')
            .collect();
        Some(token)
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, mail: OutboundMail) -> ServiceResult<()> {
        self.sent.lock().unwrap().push(mail);
        Ok(())
    }
}
