use crate::{AnyItem, Document, ItemKind, ItemRecord};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    pub id: Uuid,
    pub sprint_name: String,
    #[serde(default)]
    pub sprint_goals: Option<String>,
    #[serde(default, deserialize_with = "crate::items::item_date::deserialize")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::items::item_date::deserialize")]
    pub end_date: Option<DateTime<Utc>>,
    /// Group whose tasks this sprint tracks.
    #[serde(default)]
    pub connected_group: Option<Uuid>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "crate::items::item_date::deserialize")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assigned_to_id: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document for Sprint {
    const COLLECTION: &'static str = "wb_sprints";

    fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl ItemRecord for Sprint {
    const KIND: ItemKind = ItemKind::Sprint;

    fn name(&self) -> &str {
        &self.sprint_name
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date.or(self.end_date)
    }

    fn assignees(&self) -> &[Uuid] {
        &self.assigned_to_id
    }

    fn assignees_mut(&mut self) -> &mut Vec<Uuid> {
        &mut self.assigned_to_id
    }
}

impl From<Sprint> for AnyItem {
    fn from(sprint: Sprint) -> Self {
        AnyItem::Sprint(sprint)
    }
}
