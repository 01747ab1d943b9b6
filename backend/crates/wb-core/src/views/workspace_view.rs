use crate::{BoardSummary, MemberView};

use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceView {
    pub workspace_id: Uuid,
    pub workspace_name: String,
    pub boards: Vec<BoardSummary>,
    pub members: Vec<MemberView>,
}
