//! Board and group events. Board projections and group creation or removal
//! go through the type dispatch router; plain renames go to the board
//! manager.

use crate::handlers::payloads::{
    AddBoardPayload, AddGroupPayload, BoardPayload, GroupPayload, UpdateBoardPayload,
    UpdateGroupPayload, decode, done,
};
use crate::{HandlerContext, Result as WsResult};

use wb_core::Outcome;

use serde_json::Value;

pub async fn handle_add_board(data: Value, ctx: HandlerContext) -> WsResult<Outcome<Value>> {
    let req: AddBoardPayload = decode("addBoardToWorkspace", data)?;

    let summary = ctx
        .services
        .boards
        .add_board(req.id, req.board, ctx.user_id)
        .await?;

    done(&summary)
}

pub async fn handle_remove_board(data: Value, ctx: HandlerContext) -> WsResult<Outcome<Value>> {
    let req: BoardPayload = decode("removeBoardFromWorkspace", data)?;

    done(&ctx.services.boards.remove_board(req.board_id).await?)
}

pub async fn handle_update_board(data: Value, ctx: HandlerContext) -> WsResult<Outcome<Value>> {
    let req: UpdateBoardPayload = decode("updateBoardInWorkspace", data)?;

    done(
        &ctx.services
            .boards
            .update_board(req.board_id, req.update_data)
            .await?,
    )
}

pub async fn handle_get_board(data: Value, ctx: HandlerContext) -> WsResult<Outcome<Value>> {
    let req: BoardPayload = decode("getBoardById", data)?;

    let view = ctx
        .services
        .items
        .fetch_board(req.item_type.as_deref(), req.board_id)
        .await?;

    done(&view)
}

pub async fn handle_add_group(data: Value, ctx: HandlerContext) -> WsResult<Outcome<Value>> {
    let req: AddGroupPayload = decode("addGroupToBoard", data)?;

    let view = ctx
        .services
        .items
        .add_group(req.item_type.as_deref(), req.board_id, req.group)
        .await?;

    done(&view)
}

pub async fn handle_remove_group(data: Value, ctx: HandlerContext) -> WsResult<Outcome<Value>> {
    let req: GroupPayload = decode("removeGroupFromBoard", data)?;

    let view = ctx
        .services
        .items
        .remove_group(req.item_type.as_deref(), req.group_id)
        .await?;

    done(&view)
}

pub async fn handle_update_group(data: Value, ctx: HandlerContext) -> WsResult<Outcome<Value>> {
    let req: UpdateGroupPayload = decode("updateGroupInBoard", data)?;

    done(
        &ctx.services
            .boards
            .update_group(req.group_id, req.update_data)
            .await?,
    )
}
