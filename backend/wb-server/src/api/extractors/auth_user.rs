//! Axum extractors for REST API authentication

use crate::ApiError;

use wb_ws::AppState;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

/// The caller behind a valid `Authorization: Bearer <session token>` header.
pub struct AuthUser(pub Uuid);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = bearer_token(&parts.headers)?;
            let user_id = state.services.identity.authenticate(token)?;
            log::debug!("Authenticated request for user {}", user_id);
            Ok(AuthUser(user_id))
        }
    }
}

/// Token from an `Authorization: Bearer` header.
#[track_caller]
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized("No token provided"))?;

    let value = value
        .to_str()
        .map_err(|_| ApiError::unauthorized("Malformed Authorization header"))?;

    match value.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        _ => Err(ApiError::unauthorized("Authorization must use the Bearer scheme")),
    }
}
