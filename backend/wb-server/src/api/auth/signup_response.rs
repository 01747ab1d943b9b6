use wb_core::UserView;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub user: UserView,
}
