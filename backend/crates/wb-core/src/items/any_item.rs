use crate::{Bug, Contact, Incident, Item, ItemKind, Lead, Sprint, Task, Ticket};

use serde::Serialize;
use uuid::Uuid;

/// An item of any variant, serialized as the underlying record.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnyItem {
    Item(Item),
    Task(Task),
    Bug(Bug),
    Sprint(Sprint),
    Ticket(Ticket),
    Incident(Incident),
    Lead(Lead),
    Contact(Contact),
}

impl AnyItem {
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Item(_) => ItemKind::Item,
            Self::Task(_) => ItemKind::Task,
            Self::Bug(_) => ItemKind::Bug,
            Self::Sprint(_) => ItemKind::Sprint,
            Self::Ticket(_) => ItemKind::Ticket,
            Self::Incident(_) => ItemKind::Incident,
            Self::Lead(_) => ItemKind::Lead,
            Self::Contact(_) => ItemKind::Contact,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Self::Item(r) => r.id,
            Self::Task(r) => r.id,
            Self::Bug(r) => r.id,
            Self::Sprint(r) => r.id,
            Self::Ticket(r) => r.id,
            Self::Incident(r) => r.id,
            Self::Lead(r) => r.id,
            Self::Contact(r) => r.id,
        }
    }
}
