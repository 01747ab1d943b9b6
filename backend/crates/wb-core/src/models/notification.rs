use crate::NotificationStatus;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    #[serde(default)]
    pub status: NotificationStatus,
}

impl Notification {
    pub fn unread(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: NotificationStatus::Unread,
        }
    }
}
