use wb_core::Notification;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NotificationListResponse {
    pub message: String,
    pub notifications: Vec<Notification>,
}
