use wb_core::UserView;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub message: String,
    pub users: Vec<UserView>,
}
