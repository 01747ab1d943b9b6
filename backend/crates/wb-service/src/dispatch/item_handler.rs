use crate::ServiceResult;

use wb_core::{AnyItem, AssigneeList, BoardView, CreatedItem, Group, ItemKind, NewGroup, Outcome};

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

/// Board and item operations for one item variant.
///
/// Every implementation returns the same projection shapes; only the
/// variant-specific keys (`tickets`, `ticketName`, ...) differ.
#[async_trait]
pub trait ItemHandler: Send + Sync {
    fn kind(&self) -> ItemKind;

    async fn fetch_board(&self, board_id: Uuid) -> ServiceResult<BoardView>;

    async fn add_group(&self, board_id: Uuid, group: NewGroup) -> ServiceResult<BoardView>;

    async fn remove_group(&self, group_id: Uuid) -> ServiceResult<BoardView>;

    async fn add_item_to_group(&self, group_id: Uuid, item: Value) -> ServiceResult<Group>;

    async fn add_item(&self, item: Value) -> ServiceResult<CreatedItem>;

    async fn remove_item_from_group(&self, item_id: Uuid) -> ServiceResult<Group>;

    async fn update_item(&self, item_id: Uuid, patch: Value) -> ServiceResult<AnyItem>;

    /// Conflict error if the user is already assigned.
    async fn add_member(&self, item_id: Uuid, user_id: Uuid) -> ServiceResult<AssigneeList>;

    /// No-op outcome if the user is not assigned.
    async fn remove_member(
        &self,
        item_id: Uuid,
        user_id: Uuid,
    ) -> ServiceResult<Outcome<AssigneeList>>;
}
