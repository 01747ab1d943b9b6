//! Workspace events: listing, CRUD and membership.

use crate::handlers::payloads::{
    CreateWorkspacePayload, DeleteWorkspacePayload, ModulePayload, UpdateWorkspacePayload,
    WorkspaceIdPayload, WorkspaceMemberPayload, decode, done, message_outcome, value_outcome,
};
use crate::{HandlerContext, Result as WsResult};

use wb_core::Outcome;

use serde_json::Value;

/// Workspaces in the module that the caller created or belongs to.
pub async fn handle_get_workspaces(data: Value, ctx: HandlerContext) -> WsResult<Outcome<Value>> {
    let req: ModulePayload = decode("getWorkspaces", data)?;

    let workspaces = ctx
        .services
        .workspaces
        .query(req.module_id, ctx.user_id)
        .await?;

    done(&workspaces)
}

pub async fn handle_get_workspace(data: Value, ctx: HandlerContext) -> WsResult<Outcome<Value>> {
    let req: WorkspaceIdPayload = decode("getBoardsByWorkspaceById", data)?;

    done(&ctx.services.workspaces.get_by_id(req.id).await?)
}

pub async fn handle_get_workspace_details(
    data: Value,
    ctx: HandlerContext,
) -> WsResult<Outcome<Value>> {
    let req: WorkspaceIdPayload = decode("getWorkspaceDetailsById", data)?;

    done(&ctx.services.workspaces.get_details(req.id).await?)
}

/// The caller becomes creator and sole admin.
pub async fn handle_create_workspace(
    data: Value,
    ctx: HandlerContext,
) -> WsResult<Outcome<Value>> {
    let req: CreateWorkspacePayload = decode("createWorkspace", data)?;

    let workspace = ctx
        .services
        .workspaces
        .add(req.module_id, req.workspace_data, ctx.user_id)
        .await?;

    done(&workspace)
}

pub async fn handle_update_workspace(
    data: Value,
    ctx: HandlerContext,
) -> WsResult<Outcome<Value>> {
    let req: UpdateWorkspacePayload = decode("updateWorkspaceById", data)?;

    let outcome = ctx
        .services
        .workspaces
        .update(req.id, req.update_data, ctx.user_id)
        .await?;

    value_outcome(outcome)
}

pub async fn handle_delete_workspace(
    data: Value,
    ctx: HandlerContext,
) -> WsResult<Outcome<Value>> {
    let req: DeleteWorkspacePayload = decode("deleteWorkspaceById", data)?;

    let outcome = ctx
        .services
        .workspaces
        .remove(req.id, req.module_id, ctx.user_id)
        .await?;

    value_outcome(outcome)
}

pub async fn handle_add_workspace_member(
    data: Value,
    ctx: HandlerContext,
) -> WsResult<Outcome<Value>> {
    let req: WorkspaceMemberPayload = decode("addMemberToWorkspace", data)?;

    let outcome = ctx
        .services
        .workspaces
        .add_member(req.id, req.user_id, ctx.user_id, req.role)
        .await?;

    Ok(message_outcome(outcome))
}

pub async fn handle_remove_workspace_member(
    data: Value,
    ctx: HandlerContext,
) -> WsResult<Outcome<Value>> {
    let req: WorkspaceMemberPayload = decode("removeMemberFromWorkspace", data)?;

    let outcome = ctx
        .services
        .workspaces
        .remove_member(req.id, req.user_id, ctx.user_id)
        .await?;

    Ok(message_outcome(outcome))
}
