use crate::GroupView;

use serde::Serialize;
use uuid::Uuid;

/// Board projection returned by every item handler, whatever the variant.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub board_id: Uuid,
    pub board_name: String,
    pub workspace_name: String,
    pub groups: Vec<GroupView>,
}
