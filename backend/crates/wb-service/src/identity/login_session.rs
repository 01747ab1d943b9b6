use serde::Serialize;
use uuid::Uuid;

/// Issued on password or OAuth login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginSession {
    pub token: String,
    pub user_name: String,
    pub user_id: Uuid,
}
