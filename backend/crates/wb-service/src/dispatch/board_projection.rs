use crate::ServiceResult;

use wb_core::{
    AssigneeList, AssigneeView, Board, BoardView, Group, GroupView, ItemRecord, ItemView, User,
};
use wb_db::DocumentRepository;

use std::collections::{HashMap, HashSet};

use sqlx::SqlitePool;
use uuid::Uuid;

/// Renders a board with its groups and the `T` items each group lists.
///
/// Dangling group or item references are skipped, as are assignees whose
/// user no longer exists.
pub async fn project_board<T: ItemRecord>(
    pool: &SqlitePool,
    board: &Board,
) -> ServiceResult<BoardView> {
    let groups: Vec<Group> = DocumentRepository::find_many(pool, &board.groups).await?;

    let mut records_by_group = Vec::with_capacity(groups.len());
    for group in &groups {
        let records: Vec<T> = DocumentRepository::find_many(pool, group.item_ids(T::KIND)).await?;
        records_by_group.push(records);
    }

    let mut seen = HashSet::new();
    let assignee_ids: Vec<Uuid> = records_by_group
        .iter()
        .flatten()
        .flat_map(|record| record.assignees().iter().copied())
        .filter(|id| seen.insert(*id))
        .collect();
    let users = load_users(pool, &assignee_ids).await?;

    let group_views = groups
        .into_iter()
        .zip(records_by_group)
        .map(|(group, records)| GroupView {
            group_id: group.id,
            group_name: group.group_name,
            kind: T::KIND,
            items: records
                .iter()
                .map(|record| ItemView::from_record(record, resolve(&users, record.assignees())))
                .collect(),
        })
        .collect();

    Ok(BoardView {
        board_id: board.id,
        board_name: board.board_name.clone(),
        workspace_name: board.workspace_name.clone(),
        groups: group_views,
    })
}

/// `{ assignedToId: [...] }` for the given user ids, in order.
pub async fn assignee_list(pool: &SqlitePool, user_ids: &[Uuid]) -> ServiceResult<AssigneeList> {
    let users = load_users(pool, user_ids).await?;
    Ok(AssigneeList {
        assigned_to_id: resolve(&users, user_ids),
    })
}

async fn load_users(pool: &SqlitePool, ids: &[Uuid]) -> ServiceResult<HashMap<Uuid, User>> {
    let users: Vec<User> = DocumentRepository::find_many(pool, ids).await?;
    Ok(users.into_iter().map(|u| (u.id, u)).collect())
}

fn resolve(users: &HashMap<Uuid, User>, ids: &[Uuid]) -> Vec<AssigneeView> {
    ids.iter()
        .filter_map(|id| users.get(id))
        .map(AssigneeView::from)
        .collect()
}
