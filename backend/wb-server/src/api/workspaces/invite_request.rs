use wb_core::WorkspaceRole;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct InviteRequest {
    pub email: String,
    /// Defaults to member
    #[serde(default)]
    pub role: Option<WorkspaceRole>,
}
