use crate::{AnyItem, Document, ItemKind, ItemRecord};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// CRM prospect.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: Uuid,
    pub lead_name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "crate::items::item_date::deserialize")]
    pub last_interaction: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::items::item_date::deserialize")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assigned_to_id: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document for Lead {
    const COLLECTION: &'static str = "wb_leads";

    fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl ItemRecord for Lead {
    const KIND: ItemKind = ItemKind::Lead;

    fn name(&self) -> &str {
        &self.lead_name
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

impl From<Lead> for AnyItem {
    fn from(lead: Lead) -> Self {
        AnyItem::Lead(lead)
    }
}
