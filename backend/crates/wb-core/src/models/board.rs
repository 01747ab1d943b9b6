use crate::{Document, NewBoard, Workspace};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_BOARD_TYPE: &str = "Item";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: Uuid,
    pub board_name: String,
    /// Copied from the workspace at creation; not refreshed on rename.
    pub workspace_name: String,
    pub workspace_id: Uuid,
    #[serde(rename = "type", default = "default_board_type")]
    pub board_type: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_by_id: Uuid,
    #[serde(default)]
    pub groups: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_board_type() -> String {
    DEFAULT_BOARD_TYPE.to_string()
}

impl Board {
    pub fn new(data: NewBoard, workspace: &Workspace, created_by_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            board_name: data.board_name,
            workspace_name: workspace.workspace_name.clone(),
            workspace_id: workspace.id,
            board_type: data.board_type.unwrap_or_else(default_board_type),
            description: data.description,
            created_by_id,
            groups: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn detach_group(&mut self, group_id: Uuid) -> bool {
        let before = self.groups.len();
        self.groups.retain(|id| *id != group_id);
        self.groups.len() != before
    }
}

impl Document for Board {
    const COLLECTION: &'static str = "wb_boards";

    fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
