use crate::{Document, NewWorkspace, WorkspaceMember, WorkspaceRole};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: Uuid,
    pub workspace_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_by: Uuid,
    #[serde(default)]
    pub members: Vec<WorkspaceMember>,
    #[serde(default)]
    pub boards: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Workspace {
    /// The creator is always the sole initial member, as admin.
    pub fn new(data: NewWorkspace, created_by: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            workspace_name: data.workspace_name,
            description: data.description,
            created_by,
            members: vec![WorkspaceMember {
                user_id: created_by,
                role: WorkspaceRole::Admin,
            }],
            boards: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_creator(&self, user_id: Uuid) -> bool {
        self.created_by == user_id
    }

    pub fn is_admin(&self, user_id: Uuid) -> bool {
        self.role_of(user_id) == Some(WorkspaceRole::Admin)
    }

    pub fn is_member(&self, user_id: Uuid) -> bool {
        self.members.iter().any(|m| m.user_id == user_id)
    }

    pub fn is_visible_to(&self, user_id: Uuid) -> bool {
        self.is_creator(user_id) || self.is_member(user_id)
    }

    pub fn role_of(&self, user_id: Uuid) -> Option<WorkspaceRole> {
        self.members
            .iter()
            .find(|m| m.user_id == user_id)
            .map(|m| m.role)
    }

    pub fn detach_board(&mut self, board_id: Uuid) -> bool {
        let before = self.boards.len();
        self.boards.retain(|id| *id != board_id);
        self.boards.len() != before
    }
}

impl Document for Workspace {
    const COLLECTION: &'static str = "wb_workspaces";

    fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
