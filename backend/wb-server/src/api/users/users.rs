//! User REST API handlers

use crate::{
    ApiJson, ApiResult, CheckRoleRequest, MarkReadResponse, NotificationListResponse,
    RoleResponse, UserDetailsResponse, UserListResponse,
};

use wb_ws::AppState;

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<UserListResponse>> {
    let users = state.services.identity.list_users().await?;

    Ok(Json(UserListResponse {
        message: "Users fetched successfully".to_string(),
        users,
    }))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserDetailsResponse>> {
    let user_id = Uuid::parse_str(&id)?;
    let user = state.services.identity.user_details(user_id).await?;

    Ok(Json(UserDetailsResponse {
        message: "User details fetched successfully".to_string(),
        user,
    }))
}

/// GET /api/users/{id}/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<NotificationListResponse>> {
    let user_id = Uuid::parse_str(&id)?;
    let notifications = state.services.identity.notifications(user_id).await?;

    Ok(Json(NotificationListResponse {
        message: "Notifications fetched successfully".to_string(),
        notifications,
    }))
}

/// POST /api/users/{id}/notifications/read
pub async fn mark_notifications_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MarkReadResponse>> {
    let user_id = Uuid::parse_str(&id)?;
    let updated = state
        .services
        .identity
        .mark_notifications_read(user_id)
        .await?;

    Ok(Json(MarkReadResponse {
        message: "Notifications marked as read".to_string(),
        updated,
    }))
}

/// POST /api/users/check-role
pub async fn check_role(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CheckRoleRequest>,
) -> ApiResult<Json<RoleResponse>> {
    let role = state
        .services
        .identity
        .check_role(request.workspace_id, request.user_id)
        .await?;

    Ok(Json(RoleResponse {
        message: "Role fetched successfully".to_string(),
        role,
    }))
}
