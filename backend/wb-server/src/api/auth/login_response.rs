use wb_service::LoginSession;

use serde::Serialize;

/// `{ message, token, userName, userId }`
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    #[serde(flatten)]
    pub session: LoginSession,
}
