//! Wiring from configuration to the shared application state.

use crate::error::{Result as ServerErrorResult, ServerError};

use wb_auth::{RateLimiterFactory, TokenLifetimes};
use wb_config::Config;
use wb_service::{ServiceSettings, Services};
use wb_ws::{
    AppState, ConnectionConfig, ConnectionLimits, ConnectionRegistry, Metrics, ShutdownCoordinator,
};

pub fn service_settings(config: &Config) -> ServerErrorResult<ServiceSettings> {
    let jwt_secret = config
        .auth
        .jwt_secret
        .clone()
        .ok_or(ServerError::MissingSetting {
            name: "auth.jwt_secret",
        })?;

    Ok(ServiceSettings {
        jwt_secret,
        token_lifetimes: TokenLifetimes {
            session: config.auth.session_ttl(),
            password_reset: config.auth.reset_token_ttl(),
            invite: config.auth.invite_token_ttl(),
        },
        reset_link_base: config.auth.reset_link_base.clone(),
        invite_link_base: config.auth.invite_link_base.clone(),
    })
}

pub fn build_app_state(
    services: Services,
    config: &Config,
    shutdown: ShutdownCoordinator,
) -> AppState {
    AppState {
        services,
        rate_limiter_factory: RateLimiterFactory::new(wb_auth::RateLimitConfig {
            max_requests: config.rate_limit.max_requests,
            window_secs: config.rate_limit.window_secs,
        }),
        registry: ConnectionRegistry::new(ConnectionLimits {
            max_total: config.server.max_connections,
        }),
        metrics: Metrics::new(),
        shutdown,
        config: ConnectionConfig {
            send_buffer_size: config.websocket.send_buffer_size,
        },
    }
}
