use crate::{AnyItem, Document, ItemKind};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Behaviour shared by every item variant. The dispatch layer is written
/// once against this trait and instantiated per variant.
pub trait ItemRecord: Document + Clone + Into<AnyItem> {
    const KIND: ItemKind;

    fn name(&self) -> &str;

    fn status(&self) -> Option<&str>;

    fn due_date(&self) -> Option<DateTime<Utc>>;

    fn assignees(&self) -> &[Uuid];

    fn assignees_mut(&mut self) -> &mut Vec<Uuid>;

    /// Records the owning group on variants that keep a back-reference.
    fn attach_to_group(&mut self, _group_id: Option<Uuid>) {}

    fn is_assigned(&self, user_id: Uuid) -> bool {
        self.assignees().contains(&user_id)
    }

    /// Returns false if the user was already assigned.
    fn assign(&mut self, user_id: Uuid) -> bool {
        if self.is_assigned(user_id) {
            return false;
        }
        self.assignees_mut().push(user_id);
        true
    }

    /// Returns false if the user was not assigned.
    fn unassign(&mut self, user_id: Uuid) -> bool {
        let assignees = self.assignees_mut();
        let before = assignees.len();
        assignees.retain(|id| *id != user_id);
        assignees.len() != before
    }
}
