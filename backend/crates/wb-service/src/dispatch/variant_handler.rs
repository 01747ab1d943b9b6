use crate::{
    ItemHandler, NotificationDispatcher, ServiceError, ServiceResult, assignee_list, project_board,
};

use wb_core::{
    AnyItem, AssigneeList, Board, BoardView, CreatedItem, Document, Group, ItemKind, ItemRecord,
    NewGroup, Outcome, User, apply_patch, new_document,
};
use wb_db::DocumentRepository;

use std::marker::PhantomData;

use async_trait::async_trait;
use log::{debug, info};
use serde_json::Value;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Assignments only change through add/remove member so every change is
/// notified.
const PROTECTED_ITEM_FIELDS: [&str; 1] = ["assignedToId"];

/// [`ItemHandler`] for any [`ItemRecord`]. One instance per variant is
/// registered with the router.
pub struct VariantHandler<T> {
    pool: SqlitePool,
    notifications: NotificationDispatcher,
    _record: PhantomData<fn() -> T>,
}

impl<T: ItemRecord> VariantHandler<T> {
    pub fn new(pool: SqlitePool, notifications: NotificationDispatcher) -> Self {
        Self {
            pool,
            notifications,
            _record: PhantomData,
        }
    }

    async fn load_board(&self, board_id: Uuid) -> ServiceResult<Board> {
        DocumentRepository::find_by_id::<Board, _>(&self.pool, board_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Board not found"))
    }

    async fn load_record(&self, item_id: Uuid) -> ServiceResult<T> {
        DocumentRepository::find_by_id::<T, _>(&self.pool, item_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("{} not found", T::KIND)))
    }

    async fn load_user(&self, user_id: Uuid) -> ServiceResult<User> {
        DocumentRepository::find_by_id::<User, _>(&self.pool, user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User not found"))
    }
}

#[async_trait]
impl<T: ItemRecord> ItemHandler for VariantHandler<T> {
    fn kind(&self) -> ItemKind {
        T::KIND
    }

    async fn fetch_board(&self, board_id: Uuid) -> ServiceResult<BoardView> {
        let board = self.load_board(board_id).await?;
        project_board::<T>(&self.pool, &board).await
    }

    async fn add_group(&self, board_id: Uuid, group: NewGroup) -> ServiceResult<BoardView> {
        let mut tx = self.pool.begin().await?;

        let mut board = DocumentRepository::find_by_id::<Board, _>(&mut *tx, board_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Board not found"))?;

        let group = Group::new(group, board.id);
        DocumentRepository::insert(&mut *tx, &group).await?;

        board.groups.push(group.id);
        board.touch();
        DocumentRepository::save(&mut *tx, &board).await?;

        tx.commit().await?;
        info!("Added group {} to board {}", group.id, board.id);

        project_board::<T>(&self.pool, &board).await
    }

    async fn remove_group(&self, group_id: Uuid) -> ServiceResult<BoardView> {
        let mut tx = self.pool.begin().await?;

        let group = DocumentRepository::find_by_id::<Group, _>(&mut *tx, group_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Group not found"))?;

        let mut board =
            DocumentRepository::find_containing::<Board, _>(&mut *tx, "groups", group_id)
                .await?
                .ok_or_else(|| {
                    ServiceError::inconsistent("Board containing the group not found")
                })?;

        board.detach_group(group_id);
        board.touch();
        DocumentRepository::save(&mut *tx, &board).await?;
        DocumentRepository::delete::<Group, _>(&mut *tx, group_id).await?;

        tx.commit().await?;

        let orphaned = group.item_count();
        if orphaned > 0 {
            debug!(
                "Group {} removed with {} item references left in place",
                group_id, orphaned
            );
        }
        info!("Removed group {} from board {}", group_id, board.id);

        project_board::<T>(&self.pool, &board).await
    }

    async fn add_item_to_group(&self, group_id: Uuid, item: Value) -> ServiceResult<Group> {
        let mut record: T = new_document(item)?;

        let mut tx = self.pool.begin().await?;

        let mut group = DocumentRepository::find_by_id::<Group, _>(&mut *tx, group_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Group not found"))?;

        record.attach_to_group(Some(group.id));
        DocumentRepository::insert(&mut *tx, &record).await?;

        group.item_ids_mut(T::KIND).push(record.id());
        group.touch();
        DocumentRepository::save(&mut *tx, &group).await?;

        tx.commit().await?;
        info!("Added {} {} to group {}", T::KIND.label(), record.id(), group.id);

        Ok(group)
    }

    async fn add_item(&self, item: Value) -> ServiceResult<CreatedItem> {
        let record: T = new_document(item)?;
        DocumentRepository::insert(&self.pool, &record).await?;

        info!("Created standalone {} {}", T::KIND.label(), record.id());
        Ok(CreatedItem {
            kind: T::KIND,
            id: record.id(),
        })
    }

    async fn remove_item_from_group(&self, item_id: Uuid) -> ServiceResult<Group> {
        let mut tx = self.pool.begin().await?;

        DocumentRepository::find_by_id::<T, _>(&mut *tx, item_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("{} not found", T::KIND)))?;

        let mut group = DocumentRepository::find_containing::<Group, _>(
            &mut *tx,
            T::KIND.items_field(),
            item_id,
        )
        .await?
        .ok_or_else(|| {
            ServiceError::not_found(format!(
                "Group containing the {} not found",
                T::KIND.label()
            ))
        })?;

        group.detach_item(T::KIND, item_id);
        group.touch();
        DocumentRepository::save(&mut *tx, &group).await?;
        DocumentRepository::delete::<T, _>(&mut *tx, item_id).await?;

        tx.commit().await?;
        info!("Removed {} {} from group {}", T::KIND.label(), item_id, group.id);

        Ok(group)
    }

    async fn update_item(&self, item_id: Uuid, patch: Value) -> ServiceResult<AnyItem> {
        let current = self.load_record(item_id).await?;

        let mut updated: T = apply_patch(&current, patch, &PROTECTED_ITEM_FIELDS)?;
        updated.touch();
        DocumentRepository::save(&self.pool, &updated).await?;

        debug!("Updated {} {}", T::KIND.label(), item_id);
        Ok(updated.into())
    }

    async fn add_member(&self, item_id: Uuid, user_id: Uuid) -> ServiceResult<AssigneeList> {
        let mut record = self.load_record(item_id).await?;
        let user = self.load_user(user_id).await?;

        if !record.assign(user_id) {
            return Err(ServiceError::conflict(format!(
                "User is already assigned to this {}",
                T::KIND.label()
            )));
        }

        record.touch();
        DocumentRepository::save(&self.pool, &record).await?;
        info!("Assigned user {} to {} {}", user_id, T::KIND.label(), item_id);

        self.notifications
            .member_assigned(&user, T::KIND, record.name())
            .await;

        assignee_list(&self.pool, record.assignees()).await
    }

    async fn remove_member(
        &self,
        item_id: Uuid,
        user_id: Uuid,
    ) -> ServiceResult<Outcome<AssigneeList>> {
        let mut record = self.load_record(item_id).await?;
        let user = self.load_user(user_id).await?;

        if !record.unassign(user_id) {
            return Ok(Outcome::NoOp(format!(
                "User is not assigned to this {}",
                T::KIND.label()
            )));
        }

        record.touch();
        DocumentRepository::save(&self.pool, &record).await?;
        info!("Unassigned user {} from {} {}", user_id, T::KIND.label(), item_id);

        self.notifications
            .member_removed(&user, T::KIND, record.name())
            .await;

        assignee_list(&self.pool, record.assignees())
            .await
            .map(Outcome::Done)
    }
}
