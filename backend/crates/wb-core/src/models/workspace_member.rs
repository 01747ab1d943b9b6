use crate::WorkspaceRole;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceMember {
    pub user_id: Uuid,
    #[serde(default)]
    pub role: WorkspaceRole,
}
