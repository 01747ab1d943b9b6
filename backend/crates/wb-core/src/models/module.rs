use crate::{Document, ModuleName};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: Uuid,
    pub module_name: ModuleName,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub workspaces: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Module {
    pub fn new(module_name: ModuleName) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            module_name,
            description: Some(module_name.default_description().to_string()),
            workspaces: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Removes a workspace reference. Returns false if it was not attached.
    pub fn detach_workspace(&mut self, workspace_id: Uuid) -> bool {
        let before = self.workspaces.len();
        self.workspaces.retain(|id| *id != workspace_id);
        self.workspaces.len() != before
    }
}

impl Document for Module {
    const COLLECTION: &'static str = "wb_modules";

    fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
