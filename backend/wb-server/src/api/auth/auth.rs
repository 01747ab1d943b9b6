//! Account REST API handlers
//!
//! Signup, login (password and OAuth), token checks and password recovery.

use crate::api::extractors::auth_user::bearer_token;
use crate::{
    ApiError, ApiJson, ApiResult, EmailRequest, LoginRequest, LoginResponse, MessageResponse,
    OAuthRequest, ResetPasswordRequest, SignupResponse, VerifyTokenResponse,
};

use wb_core::UserView;
use wb_service::SignupRequest;
use wb_service::identity::identity_service::EMAIL_TAKEN;
use wb_ws::AppState;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SignupRequest>,
) -> ApiResult<(StatusCode, Json<SignupResponse>)> {
    let user = state.services.identity.signup(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User created successfully".to_string(),
            user: UserView::from(&user),
        }),
    ))
}

/// POST /api/auth/email
///
/// 200 when the address is free, 409 when an account already uses it.
pub async fn check_email(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<EmailRequest>,
) -> ApiResult<Json<MessageResponse>> {
    if state
        .services
        .identity
        .is_email_available(&request.email)
        .await?
    {
        Ok(Json(MessageResponse::new("Email is available")))
    } else {
        Err(ApiError::conflict(EMAIL_TAKEN))
    }
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let session = state
        .services
        .identity
        .login(&request.email, &request.password)
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        session,
    }))
}

/// POST /api/auth/logout
///
/// Sessions are stateless tokens; the client discards its copy.
pub async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse::new("Logged out successfully"))
}

/// POST /api/auth/oauth
pub async fn oauth_login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<OAuthRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let session = state
        .services
        .identity
        .oauth_login(&request.email, &request.name)
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        session,
    }))
}

/// POST /api/auth/verify-token
pub async fn verify_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<VerifyTokenResponse>> {
    let token = bearer_token(&headers)?;
    let user_id = state.services.identity.authenticate(token)?;

    Ok(Json(VerifyTokenResponse {
        message: "Token is valid".to_string(),
        user_id,
    }))
}

/// POST /api/auth/forgot-password
pub async fn forgot_password(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<EmailRequest>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .services
        .identity
        .request_password_reset(&request.email)
        .await?;

    Ok(Json(MessageResponse::new("Password reset link sent")))
}

/// POST /api/auth/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ResetPasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .services
        .identity
        .reset_password(&request.token, &request.new_password)
        .await?;

    Ok(Json(MessageResponse::new("Password reset successfully")))
}
