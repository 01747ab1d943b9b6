use crate::{Document, ItemKind, NewGroup};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A board section. Holds one id list per item variant; only the list
/// matching the board's view is read by a fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: Uuid,
    pub group_name: String,
    pub board_id: Uuid,
    #[serde(default)]
    pub items: Vec<Uuid>,
    #[serde(default)]
    pub contacts: Vec<Uuid>,
    #[serde(default)]
    pub leads: Vec<Uuid>,
    #[serde(default)]
    pub sprints: Vec<Uuid>,
    #[serde(default)]
    pub tasks: Vec<Uuid>,
    #[serde(default)]
    pub bugs: Vec<Uuid>,
    #[serde(default)]
    pub tickets: Vec<Uuid>,
    #[serde(default)]
    pub incidents: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Group {
    pub fn new(data: NewGroup, board_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            group_name: data.group_name,
            board_id,
            items: Vec::new(),
            contacts: Vec::new(),
            leads: Vec::new(),
            sprints: Vec::new(),
            tasks: Vec::new(),
            bugs: Vec::new(),
            tickets: Vec::new(),
            incidents: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn item_ids(&self, kind: ItemKind) -> &[Uuid] {
        match kind {
            ItemKind::Item => &self.items,
            ItemKind::Contact => &self.contacts,
            ItemKind::Lead => &self.leads,
            ItemKind::Sprint => &self.sprints,
            ItemKind::Task => &self.tasks,
            ItemKind::Bug => &self.bugs,
            ItemKind::Ticket => &self.tickets,
            ItemKind::Incident => &self.incidents,
        }
    }

    pub fn item_ids_mut(&mut self, kind: ItemKind) -> &mut Vec<Uuid> {
        match kind {
            ItemKind::Item => &mut self.items,
            ItemKind::Contact => &mut self.contacts,
            ItemKind::Lead => &mut self.leads,
            ItemKind::Sprint => &mut self.sprints,
            ItemKind::Task => &mut self.tasks,
            ItemKind::Bug => &mut self.bugs,
            ItemKind::Ticket => &mut self.tickets,
            ItemKind::Incident => &mut self.incidents,
        }
    }

    pub fn detach_item(&mut self, kind: ItemKind, item_id: Uuid) -> bool {
        let ids = self.item_ids_mut(kind);
        let before = ids.len();
        ids.retain(|id| *id != item_id);
        ids.len() != before
    }

    /// Total number of item references across every variant list.
    pub fn item_count(&self) -> usize {
        ItemKind::ALL
            .iter()
            .map(|kind| self.item_ids(*kind).len())
            .sum()
    }
}

impl Document for Group {
    const COLLECTION: &'static str = "wb_groups";

    fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
