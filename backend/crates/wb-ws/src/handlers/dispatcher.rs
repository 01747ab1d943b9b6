use crate::handlers::board::{
    handle_add_board, handle_add_group, handle_get_board, handle_remove_board,
    handle_remove_group, handle_update_board, handle_update_group,
};
use crate::handlers::item::{
    handle_add_item_member, handle_add_item_to_group, handle_create_item,
    handle_remove_item_from_group, handle_remove_item_member, handle_update_item,
};
use crate::handlers::workspace::{
    handle_add_workspace_member, handle_create_workspace, handle_delete_workspace,
    handle_get_workspace, handle_get_workspace_details, handle_get_workspaces,
    handle_remove_workspace_member, handle_update_workspace,
};
use crate::{
    ClientEvent, EventReply, HandlerContext, Result as WsResult, WsError, log_event_received,
    log_event_settled,
};

use wb_core::Outcome;

use log::error;
use serde_json::Value;

/// Every event name the channel accepts.
pub const EVENTS: [&str; 21] = [
    "getWorkspaces",
    "getBoardsByWorkspaceById",
    "getWorkspaceDetailsById",
    "createWorkspace",
    "updateWorkspaceById",
    "deleteWorkspaceById",
    "addMemberToWorkspace",
    "removeMemberFromWorkspace",
    "addBoardToWorkspace",
    "removeBoardFromWorkspace",
    "updateBoardInWorkspace",
    "getBoardById",
    "addGroupToBoard",
    "removeGroupFromBoard",
    "updateGroupInBoard",
    "addItemToGroup",
    "createItem",
    "removeItemFromGroup",
    "updateItemInGroup",
    "addMembersToItem",
    "removeMembersFromItem",
];

/// Routes one event to its handler and turns the result into the reply.
/// Failures are logged here, the only place they become client messages.
pub async fn dispatch(event: ClientEvent, ctx: HandlerContext) -> EventReply {
    let ClientEvent {
        event: name,
        ack_id,
        data,
    } = event;

    log_event_received!(ctx.request_ctx, name);

    let result = dispatch_inner(&name, data, ctx.clone()).await;

    log_event_settled!(ctx.request_ctx, name, result);

    match result {
        Ok(outcome) => EventReply::from_outcome(ack_id, name, outcome),
        Err(e) => {
            if e.is_internal() {
                error!("{} {} failed: {:?}", ctx.log_prefix(), name, e);
            }
            EventReply::from_error(ack_id, name, &e)
        }
    }
}

async fn dispatch_inner(name: &str, data: Value, ctx: HandlerContext) -> WsResult<Outcome<Value>> {
    match name {
        // Workspaces
        "getWorkspaces" => handle_get_workspaces(data, ctx).await,
        "getBoardsByWorkspaceById" => handle_get_workspace(data, ctx).await,
        "getWorkspaceDetailsById" => handle_get_workspace_details(data, ctx).await,
        "createWorkspace" => handle_create_workspace(data, ctx).await,
        "updateWorkspaceById" => handle_update_workspace(data, ctx).await,
        "deleteWorkspaceById" => handle_delete_workspace(data, ctx).await,
        "addMemberToWorkspace" => handle_add_workspace_member(data, ctx).await,
        "removeMemberFromWorkspace" => handle_remove_workspace_member(data, ctx).await,

        // Boards and groups
        "addBoardToWorkspace" => handle_add_board(data, ctx).await,
        "removeBoardFromWorkspace" => handle_remove_board(data, ctx).await,
        "updateBoardInWorkspace" => handle_update_board(data, ctx).await,
        "getBoardById" => handle_get_board(data, ctx).await,
        "addGroupToBoard" => handle_add_group(data, ctx).await,
        "removeGroupFromBoard" => handle_remove_group(data, ctx).await,
        "updateGroupInBoard" => handle_update_group(data, ctx).await,

        // Items
        "addItemToGroup" => handle_add_item_to_group(data, ctx).await,
        "createItem" => handle_create_item(data, ctx).await,
        "removeItemFromGroup" => handle_remove_item_from_group(data, ctx).await,
        "updateItemInGroup" => handle_update_item(data, ctx).await,
        "addMembersToItem" => handle_add_item_member(data, ctx).await,
        "removeMembersFromItem" => handle_remove_item_member(data, ctx).await,

        unknown => Err(WsError::invalid_message(format!(
            "Unknown event: {}",
            unknown
        ))),
    }
}
