use crate::{AssigneeView, ItemKind, ItemRecord};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use uuid::Uuid;

/// One row of a board projection. The name key depends on the variant
/// (`ticketName`, `taskName`, ...); `status` and `dueDate` render as empty
/// strings when unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub item_id: Uuid,
    pub kind: ItemKind,
    pub name: String,
    pub assigned_to_id: Vec<AssigneeView>,
    pub status: String,
    pub due_date: String,
}

impl ItemView {
    pub fn from_record<T: ItemRecord>(record: &T, assignees: Vec<AssigneeView>) -> Self {
        Self {
            item_id: record.id(),
            kind: T::KIND,
            name: record.name().to_string(),
            assigned_to_id: assignees,
            status: record.status().unwrap_or_default().to_string(),
            due_date: record
                .due_date()
                .map(|d| d.to_rfc3339())
                .unwrap_or_default(),
        }
    }
}

impl Serialize for ItemView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        map.serialize_entry("itemId", &self.item_id)?;
        map.serialize_entry(self.kind.name_field(), &self.name)?;
        map.serialize_entry("assignedToId", &self.assigned_to_id)?;
        map.serialize_entry("status", &self.status)?;
        map.serialize_entry("dueDate", &self.due_date)?;
        map.end()
    }
}
