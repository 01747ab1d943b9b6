use crate::handlers::payloads::{
    AddItemToGroupPayload, CreateItemPayload, ItemMemberPayload, ItemPayload, UpdateItemPayload,
    decode, done,
};
use crate::{HandlerContext, Result as WsResult};

use wb_core::Outcome;

use serde_json::Value;

pub async fn handle_add_item_to_group(
    data: Value,
    ctx: HandlerContext,
) -> WsResult<Outcome<Value>> {
    let req: AddItemToGroupPayload = decode("addItemToGroup", data)?;

    let group = ctx
        .services
        .items
        .add_item_to_group(req.item_type.as_deref(), req.group_id, req.item)
        .await?;

    done(&group)
}

pub async fn handle_create_item(data: Value, ctx: HandlerContext) -> WsResult<Outcome<Value>> {
    let req: CreateItemPayload = decode("createItem", data)?;

    let created = ctx
        .services
        .items
        .add_item(req.item_type.as_deref(), req.item)
        .await?;

    done(&created)
}

pub async fn handle_remove_item_from_group(
    data: Value,
    ctx: HandlerContext,
) -> WsResult<Outcome<Value>> {
    let req: ItemPayload = decode("removeItemFromGroup", data)?;

    let group = ctx
        .services
        .items
        .remove_item_from_group(req.item_type.as_deref(), req.item_id)
        .await?;

    done(&group)
}

pub async fn handle_update_item(data: Value, ctx: HandlerContext) -> WsResult<Outcome<Value>> {
    let req: UpdateItemPayload = decode("updateItemInGroup", data)?;

    let item = ctx
        .services
        .items
        .update_item(req.item_type.as_deref(), req.item_id, req.update_data)
        .await?;

    done(&item)
}

pub async fn handle_add_item_member(data: Value, ctx: HandlerContext) -> WsResult<Outcome<Value>> {
    let req: ItemMemberPayload = decode("addMembersToItem", data)?;

    let assignees = ctx
        .services
        .items
        .add_member(req.item_type.as_deref(), req.item_id, req.user_id)
        .await?;

    done(&assignees)
}

/// Removing a user who was never assigned is a no-op reply, not an error.
pub async fn handle_remove_item_member(
    data: Value,
    ctx: HandlerContext,
) -> WsResult<Outcome<Value>> {
    let req: ItemMemberPayload = decode("removeMembersFromItem", data)?;

    let outcome = ctx
        .services
        .items
        .remove_member(req.item_type.as_deref(), req.item_id, req.user_id)
        .await?;

    match outcome {
        Outcome::Done(assignees) => done(&assignees),
        Outcome::NoOp(message) => Ok(Outcome::NoOp(message)),
        Outcome::Forbidden(message) => Ok(Outcome::Forbidden(message)),
    }
}
