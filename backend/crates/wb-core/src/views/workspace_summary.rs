use crate::Workspace;

use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSummary {
    pub workspace_id: Uuid,
    pub workspace_name: String,
}

impl From<&Workspace> for WorkspaceSummary {
    fn from(workspace: &Workspace) -> Self {
        Self {
            workspace_id: workspace.id,
            workspace_name: workspace.workspace_name.clone(),
        }
    }
}
