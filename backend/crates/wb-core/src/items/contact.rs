use crate::{AnyItem, Document, ItemKind, ItemRecord};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub contact_name: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "crate::items::item_date::deserialize")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assigned_to_id: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document for Contact {
    const COLLECTION: &'static str = "wb_contacts";

    fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl ItemRecord for Contact {
    const KIND: ItemKind = ItemKind::Contact;

    fn name(&self) -> &str {
        &self.contact_name
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
}

impl From<Contact> for AnyItem {
    fn from(contact: Contact) -> Self {
        AnyItem::Contact(contact)
    }
}
