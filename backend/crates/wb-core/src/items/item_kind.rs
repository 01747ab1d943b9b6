use std::fmt;

use serde::{Serialize, Serializer};

/// Item variant selected by a request's `type` discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Item,
    Task,
    Bug,
    Sprint,
    Ticket,
    Incident,
    Lead,
    Contact,
}

impl ItemKind {
    pub const ALL: [ItemKind; 8] = [
        Self::Item,
        Self::Task,
        Self::Bug,
        Self::Sprint,
        Self::Ticket,
        Self::Incident,
        Self::Lead,
        Self::Contact,
    ];

    /// Exact, case-sensitive match on the variant tag. Absent, unknown and
    /// differently-cased tags all select the generic `Item` variant.
    pub fn from_discriminator(tag: Option<&str>) -> Self {
        match tag {
            Some("Task") => Self::Task,
            Some("Bug") => Self::Bug,
            Some("Sprint") => Self::Sprint,
            Some("Ticket") => Self::Ticket,
            Some("Incident") => Self::Incident,
            Some("Lead") => Self::Lead,
            Some("Contact") => Self::Contact,
            _ => Self::Item,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Item => "Item",
            Self::Task => "Task",
            Self::Bug => "Bug",
            Self::Sprint => "Sprint",
            Self::Ticket => "Ticket",
            Self::Incident => "Incident",
            Self::Lead => "Lead",
            Self::Contact => "Contact",
        }
    }

    /// Lowercase noun used in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Task => "task",
            Self::Bug => "bug",
            Self::Sprint => "sprint",
            Self::Ticket => "ticket",
            Self::Incident => "incident",
            Self::Lead => "lead",
            Self::Contact => "contact",
        }
    }

    /// Group list holding this variant, also the key in board projections.
    pub fn items_field(&self) -> &'static str {
        match self {
            Self::Item => "items",
            Self::Task => "tasks",
            Self::Bug => "bugs",
            Self::Sprint => "sprints",
            Self::Ticket => "tickets",
            Self::Incident => "incidents",
            Self::Lead => "leads",
            Self::Contact => "contacts",
        }
    }

    pub fn name_field(&self) -> &'static str {
        match self {
            Self::Item => "itemName",
            Self::Task => "taskName",
            Self::Bug => "bugName",
            Self::Sprint => "sprintName",
            Self::Ticket => "ticketName",
            Self::Incident => "incidentName",
            Self::Lead => "leadName",
            Self::Contact => "contactName",
        }
    }

    pub fn id_field(&self) -> &'static str {
        match self {
            Self::Item => "itemId",
            Self::Task => "taskId",
            Self::Bug => "bugId",
            Self::Sprint => "sprintId",
            Self::Ticket => "ticketId",
            Self::Incident => "incidentId",
            Self::Lead => "leadId",
            Self::Contact => "contactId",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ItemKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
