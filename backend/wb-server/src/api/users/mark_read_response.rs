use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MarkReadResponse {
    pub message: String,
    /// Notifications that went from unread to read
    pub updated: usize,
}
