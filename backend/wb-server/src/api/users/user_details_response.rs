use wb_core::UserDetails;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserDetailsResponse {
    pub message: String,
    pub user: UserDetails,
}
