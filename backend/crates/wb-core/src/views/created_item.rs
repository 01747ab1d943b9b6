use crate::ItemKind;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use uuid::Uuid;

/// `{ "<variant>Id": id }`, e.g. `{ "ticketId": ... }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedItem {
    pub kind: ItemKind,
    pub id: Uuid,
}

impl Serialize for CreatedItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.kind.id_field(), &self.id)?;
        map.end()
    }
}
