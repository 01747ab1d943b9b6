use crate::{Document, Notification, NotificationStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored account. `password` holds a PHC hash string and never leaves the
/// service layer; transports render [`crate::UserView`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub fullname: String,
    #[serde(default)]
    pub img_url: Option<String>,
    #[serde(default)]
    pub phonenumber: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String, password_hash: String, fullname: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password: password_hash,
            fullname,
            img_url: None,
            phonenumber: None,
            country: None,
            notifications: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn unread_count(&self) -> usize {
        self.notifications
            .iter()
            .filter(|n| n.status == NotificationStatus::Unread)
            .count()
    }

    pub fn mark_notifications_read(&mut self) {
        for notification in &mut self.notifications {
            notification.status = NotificationStatus::Read;
        }
    }
}

impl Document for User {
    const COLLECTION: &'static str = "wb_users";

    fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
