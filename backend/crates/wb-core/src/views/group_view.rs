use crate::{ItemKind, ItemView};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupView {
    pub group_id: Uuid,
    pub group_name: String,
    pub kind: ItemKind,
    pub items: Vec<ItemView>,
}

impl Serialize for GroupView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("groupId", &self.group_id)?;
        map.serialize_entry("groupName", &self.group_name)?;
        map.serialize_entry(self.kind.items_field(), &self.items)?;
        map.end()
    }
}
