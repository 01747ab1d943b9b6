use crate::{
    ConnectionConfig, ConnectionId, ConnectionRegistry, Metrics, ShutdownCoordinator,
    WebSocketConnection,
};

use wb_auth::{ConnectionRateLimiter, RateLimiterFactory};
use wb_service::{IdentityService, Services};

use axum::{
    extract::{
        Query, State,
        ws::{WebSocket, WebSocketUpgrade},
    },
    http::{HeaderMap, StatusCode},
    response::Response,
};
use log::{debug, error, warn};
use serde::Deserialize;
use uuid::Uuid;

/// Shared state for the socket endpoint
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    pub rate_limiter_factory: RateLimiterFactory,
    pub registry: ConnectionRegistry,
    pub metrics: Metrics,
    pub shutdown: ShutdownCoordinator,
    pub config: ConnectionConfig,
}

/// Browsers cannot set headers on a socket upgrade, so the token may also
/// arrive as `?token=`.
#[derive(Debug, Default, Deserialize)]
pub struct UpgradeQuery {
    pub token: Option<String>,
}

/// Authenticates the session token, registers the connection and upgrades.
pub async fn handler(
    State(state): State<AppState>,
    Query(query): Query<UpgradeQuery>,
    headers: HeaderMap,
    ws: WebSocketUpgrade,
) -> Result<Response, StatusCode> {
    let user_id = extract_user_id(&headers, query.token.as_deref(), &state.services.identity)?;
    debug!("WebSocket upgrade request from user {}", user_id);

    let connection_id = state.registry.register(user_id).await.map_err(|e| {
        error!("Failed to register connection: {}", e);
        StatusCode::SERVICE_UNAVAILABLE
    })?;

    let rate_limiter = state.rate_limiter_factory.create();

    Ok(ws.on_upgrade(move |socket| {
        handle_socket(socket, connection_id, user_id, state, rate_limiter)
    }))
}

async fn handle_socket(
    socket: WebSocket,
    connection_id: ConnectionId,
    user_id: Uuid,
    state: AppState,
    rate_limiter: ConnectionRateLimiter,
) {
    let shutdown_guard = state.shutdown.subscribe_guard();

    let connection = WebSocketConnection::new(
        connection_id,
        user_id,
        state.config,
        state.metrics.clone(),
        rate_limiter,
        state.services.clone(),
    );

    let result = connection.handle(socket, shutdown_guard).await;

    state.registry.unregister(connection_id).await;

    if let Err(e) = result {
        error!("Connection {connection_id} error: {e}");
    }
}

/// Bearer header wins over the query parameter.
fn extract_user_id(
    headers: &HeaderMap,
    query_token: Option<&str>,
    identity: &IdentityService,
) -> Result<Uuid, StatusCode> {
    let token = match headers.get("authorization").and_then(|h| h.to_str().ok()) {
        Some(header) => header.strip_prefix("Bearer ").ok_or_else(|| {
            warn!("Invalid authorization scheme: expected 'Bearer'");
            StatusCode::UNAUTHORIZED
        })?,
        None => query_token.ok_or_else(|| {
            warn!("Missing session token on socket upgrade");
            StatusCode::UNAUTHORIZED
        })?,
    };

    identity.authenticate(token.trim()).map_err(|e| {
        warn!("Session token rejected: {}", e);
        StatusCode::UNAUTHORIZED
    })
}
