pub mod app_state;
pub mod client_event;
pub mod connection_config;
pub mod connection_id;
pub mod connection_info;
pub mod connection_limits;
pub mod connection_registry;
pub mod error;
pub mod event_reply;
pub mod handlers;
pub mod metrics;
pub mod reply_status;
pub mod request_context;
pub mod request_logging;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod web_socket_connection;

pub use app_state::{AppState, UpgradeQuery, handler};
pub use client_event::ClientEvent;
pub use connection_config::ConnectionConfig;
pub use connection_id::ConnectionId;
pub use connection_info::ConnectionInfo;
pub use connection_limits::ConnectionLimits;
pub use connection_registry::ConnectionRegistry;
pub use error::{Result, WsError};
pub use event_reply::EventReply;
pub use handlers::context::HandlerContext;
pub use handlers::dispatcher::{EVENTS, dispatch};
pub use handlers::error_codes::{
    CONFLICT, INCONSISTENT_STATE, INTERNAL_ERROR, INVALID_MESSAGE, NOT_FOUND, RATE_LIMITED,
    UNAUTHORIZED, VALIDATION_ERROR,
};
pub use metrics::Metrics;
pub use reply_status::ReplyStatus;
pub use request_context::RequestContext;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use web_socket_connection::WebSocketConnection;

#[cfg(test)]
mod tests;

use tracing::info_span;

/// Span wrapping one event's handling; log records inside carry these fields.
pub fn create_event_span(correlation_id: &str, user_id: &str, event: &str) -> tracing::Span {
    info_span!(
        "ws_event",
        correlation_id = %correlation_id,
        user_id = %user_id,
        event = %event,
    )
}
