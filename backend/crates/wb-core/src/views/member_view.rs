use crate::WorkspaceRole;

use serde::Serialize;
use uuid::Uuid;

/// Member with resolved user fields. `email` and `fullname` are absent when
/// the referenced user no longer exists.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MemberView {
    pub user_id: Uuid,
    pub email: Option<String>,
    pub fullname: Option<String>,
    pub role: WorkspaceRole,
}
