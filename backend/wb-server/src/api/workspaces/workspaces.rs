//! Workspace membership by invitation
//!
//! Everything else about workspaces travels over the real-time channel.

use crate::{AcceptInviteRequest, ApiJson, ApiResult, AuthUser, InviteRequest, MessageResponse};

use wb_ws::AppState;

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

/// POST /api/workspaces/{id}/invite
pub async fn invite_member(
    State(state): State<AppState>,
    AuthUser(admin_id): AuthUser,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<InviteRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let workspace_id = Uuid::parse_str(&id)?;

    let outcome = state
        .services
        .workspaces
        .invite_member(
            workspace_id,
            &request.email,
            request.role.unwrap_or_default(),
            admin_id,
        )
        .await?;

    Ok(Json(MessageResponse::from_outcome(outcome)?))
}

/// POST /api/workspaces/accept-invite
pub async fn accept_invite(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AcceptInviteRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let outcome = state
        .services
        .workspaces
        .accept_invite(&request.token)
        .await?;

    Ok(Json(MessageResponse::from_outcome(outcome)?))
}
