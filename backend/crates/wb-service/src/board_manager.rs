use crate::{ServiceError, ServiceResult};

use wb_core::{Board, BoardSummary, Document, Group, ItemKind, NewBoard, Workspace, apply_patch};
use wb_db::DocumentRepository;

use log::{debug, info, warn};
use serde_json::Value;
use sqlx::SqlitePool;
use uuid::Uuid;

const PROTECTED_BOARD_FIELDS: [&str; 3] = ["workspaceId", "createdById", "groups"];

/// Boards within a workspace and the mutable fields of their groups. Item
/// and group membership changes go through the type dispatch router.
#[derive(Clone)]
pub struct BoardManager {
    pool: SqlitePool,
}

impl BoardManager {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn add_board(
        &self,
        workspace_id: Uuid,
        data: NewBoard,
        created_by: Uuid,
    ) -> ServiceResult<BoardSummary> {
        if data.board_name.trim().is_empty() {
            return Err(ServiceError::validation(
                "Board name is required",
                Some("boardName"),
            ));
        }

        let mut tx = self.pool.begin().await?;

        let mut workspace = DocumentRepository::find_by_id::<Workspace, _>(&mut *tx, workspace_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Workspace not found"))?;

        let board = Board::new(data, &workspace, created_by);
        DocumentRepository::insert(&mut *tx, &board).await?;

        workspace.boards.push(board.id);
        workspace.touch();
        DocumentRepository::save(&mut *tx, &workspace).await?;

        tx.commit().await?;
        info!("Added board {} to workspace {}", board.id, workspace_id);

        Ok(BoardSummary::from(&board))
    }

    /// Detaches the board from its workspace and deletes it. Groups stay in
    /// place.
    pub async fn remove_board(&self, board_id: Uuid) -> ServiceResult<Uuid> {
        let mut tx = self.pool.begin().await?;

        let board = DocumentRepository::find_by_id::<Board, _>(&mut *tx, board_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Board not found"))?;

        let mut workspace =
            DocumentRepository::find_containing::<Workspace, _>(&mut *tx, "boards", board_id)
                .await?
                .ok_or_else(|| {
                    ServiceError::inconsistent("Workspace not found for the specified board")
                })?;

        workspace.detach_board(board_id);
        workspace.touch();
        DocumentRepository::save(&mut *tx, &workspace).await?;
        DocumentRepository::delete::<Board, _>(&mut *tx, board_id).await?;

        tx.commit().await?;

        if !board.groups.is_empty() {
            warn!(
                "Board {} deleted with {} groups left in place",
                board_id,
                board.groups.len()
            );
        }
        info!("Removed board {} from workspace {}", board_id, workspace.id);

        Ok(board_id)
    }

    pub async fn update_board(&self, board_id: Uuid, patch: Value) -> ServiceResult<Board> {
        let current = DocumentRepository::find_by_id::<Board, _>(&self.pool, board_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Board not found"))?;

        let mut updated: Board = apply_patch(&current, patch, &PROTECTED_BOARD_FIELDS)?;
        updated.touch();
        DocumentRepository::save(&self.pool, &updated).await?;

        debug!("Updated board {}", board_id);
        Ok(updated)
    }

    /// Only the name and other scalar fields are patchable; the board link
    /// and item lists are owned by the dispatch handlers.
    pub async fn update_group(&self, group_id: Uuid, patch: Value) -> ServiceResult<Group> {
        let current = DocumentRepository::find_by_id::<Group, _>(&self.pool, group_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Group not found"))?;

        let mut protected: Vec<&str> = ItemKind::ALL.iter().map(|k| k.items_field()).collect();
        protected.push("boardId");

        let mut updated: Group = apply_patch(&current, patch, &protected)?;
        updated.touch();
        DocumentRepository::save(&self.pool, &updated).await?;

        debug!("Updated group {}", group_id);
        Ok(updated)
    }
}
