use crate::{AnyItem, Document, ItemKind, ItemRecord};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generic work item, used whenever a request carries no recognised type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    pub item_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "crate::items::item_date::deserialize")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assigned_to_id: Vec<Uuid>,
    #[serde(default)]
    pub group_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document for Item {
    const COLLECTION: &'static str = "wb_items";

    fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl ItemRecord for Item {
    const KIND: ItemKind = ItemKind::Item;

    fn name(&self) -> &str {
        &self.item_name
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    fn assignees(&self) -> &[Uuid] {
        &self.assigned_to_id
    }

    fn assignees_mut(&mut self) -> &mut Vec<Uuid> {
        &mut self.assigned_to_id
    }

    fn attach_to_group(&mut self, group_id: Option<Uuid>) {
        self.group_id = group_id;
    }
}

impl From<Item> for AnyItem {
    fn from(item: Item) -> Self {
        AnyItem::Item(item)
    }
}
