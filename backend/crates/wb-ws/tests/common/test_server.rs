use wb_auth::{RateLimitConfig, RateLimiterFactory, TokenIssuer, TokenLifetimes};
use wb_core::User;
use wb_db::{DocumentRepository, ModuleRepository};
use wb_service::{LogMailer, LogNotifier, ServiceSettings, Services};
use wb_ws::{
    AppState, ConnectionConfig, ConnectionLimits, ConnectionRegistry, Metrics, ShutdownCoordinator,
};

use std::sync::Arc;

use axum::{Router, routing::get};
use axum_test::TestServer;

/// HS256 requires at least 32 bytes
pub const TEST_JWT_SECRET: &str = "test-secret-key-for-integration-tests-min-32-bytes-long";

/// Not a real hash; socket tests never log in with a password.
const PLACEHOLDER_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaA";

#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub max_connections_total: usize,
    pub rate_limit_max_requests: u32,
    pub rate_limit_window_secs: u64,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            max_connections_total: 100,
            rate_limit_max_requests: 100,
            rate_limit_window_secs: 60,
        }
    }
}

impl TestServerConfig {
    pub fn with_strict_limits() -> Self {
        Self {
            max_connections_total: 2,
            ..Default::default()
        }
    }

    pub fn with_strict_rate_limits() -> Self {
        Self {
            rate_limit_max_requests: 3,
            rate_limit_window_secs: 60,
            ..Default::default()
        }
    }
}

pub struct TestServerWithState {
    pub server: TestServer,
    pub app_state: AppState,
    pub tokens: TokenIssuer,
}

impl TestServerWithState {
    pub async fn create_user(&self, email: &str, fullname: &str) -> User {
        let user = User::new(
            email.to_string(),
            PLACEHOLDER_HASH.to_string(),
            fullname.to_string(),
        );
        DocumentRepository::insert(&self.app_state.services.pool, &user)
            .await
            .expect("Failed to insert user");
        user
    }

    pub fn session_token(&self, user: &User) -> String {
        self.tokens
            .session(user.id)
            .expect("Failed to sign session token")
    }
}

pub async fn create_test_server() -> TestServerWithState {
    create_test_server_with_config(TestServerConfig::default()).await
}

pub async fn create_test_server_with_config(config: TestServerConfig) -> TestServerWithState {
    let (app, app_state) = create_app(config).await;
    let server = TestServer::builder()
        .http_transport()
        .build(app)
        .expect("Failed to create test server");

    TestServerWithState {
        server,
        app_state,
        tokens: TokenIssuer::with_hs256(TEST_JWT_SECRET.as_bytes(), TokenLifetimes::default()),
    }
}

async fn create_app(config: TestServerConfig) -> (Router, AppState) {
    let pool = wb_db::open_in_memory()
        .await
        .expect("Failed to create test pool");
    ModuleRepository::seed(&pool)
        .await
        .expect("Failed to seed modules");

    let settings = ServiceSettings {
        jwt_secret: TEST_JWT_SECRET.to_string(),
        token_lifetimes: TokenLifetimes::default(),
        reset_link_base: "http://localhost:3000/reset-password".to_string(),
        invite_link_base: "http://localhost:3000/accept-invite".to_string(),
    };
    let services = Services::new(
        pool,
        settings,
        Arc::new(LogNotifier),
        Arc::new(LogMailer::new("no-reply@example.com")),
    );

    let app_state = AppState {
        services,
        rate_limiter_factory: RateLimiterFactory::new(RateLimitConfig {
            max_requests: config.rate_limit_max_requests,
            window_secs: config.rate_limit_window_secs,
        }),
        registry: ConnectionRegistry::new(ConnectionLimits {
            max_total: config.max_connections_total,
        }),
        metrics: Metrics::default(),
        shutdown: ShutdownCoordinator::new(),
        config: ConnectionConfig::default(),
    };

    let router = Router::new()
        .route("/ws", get(wb_ws::handler))
        .with_state(app_state.clone());

    (router, app_state)
}
