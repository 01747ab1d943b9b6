use wb_core::WorkspaceRole;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub message: String,
    pub role: WorkspaceRole,
}
