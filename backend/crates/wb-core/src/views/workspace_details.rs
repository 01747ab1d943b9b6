use crate::{Board, WorkspaceMember};

use serde::Serialize;
use uuid::Uuid;

/// Workspace with full board documents, used by workspace settings screens.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceDetails {
    pub workspace_id: Uuid,
    pub workspace_name: String,
    pub description: Option<String>,
    pub created_by: Uuid,
    pub members: Vec<WorkspaceMember>,
    pub boards: Vec<Board>,
}
