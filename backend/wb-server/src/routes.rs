use crate::{
    accept_invite, check_email, check_role, forgot_password, get_user, health, invite_member,
    list_modules, list_notifications, list_users, login, logout, mark_notifications_read,
    oauth_login, reset_password, signup, verify_token,
};

use wb_ws::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Real-time channel
        .route("/ws", get(wb_ws::handler))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Accounts
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/email", post(check_email))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/oauth", post(oauth_login))
        .route("/api/auth/verify-token", post(verify_token))
        .route("/api/auth/forgot-password", post(forgot_password))
        .route("/api/auth/reset-password", post(reset_password))
        // Users
        .route("/api/users", get(list_users))
        .route("/api/users/check-role", post(check_role))
        .route("/api/users/{id}", get(get_user))
        .route("/api/users/{id}/notifications", get(list_notifications))
        .route(
            "/api/users/{id}/notifications/read",
            post(mark_notifications_read),
        )
        // Modules and workspace invitations
        .route("/api/modules", get(list_modules))
        .route("/api/workspaces/accept-invite", post(accept_invite))
        .route("/api/workspaces/{id}/invite", post(invite_member))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
