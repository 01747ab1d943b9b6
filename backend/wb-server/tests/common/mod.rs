#![allow(dead_code)]

//! Test infrastructure for wb-server API tests

use wb_auth::{RateLimitConfig, RateLimiterFactory, TokenIssuer, TokenLifetimes};
use wb_core::{NewWorkspace, Workspace};
use wb_db::ModuleRepository;
use wb_server::build_router;
use wb_service::{LogNotifier, Mailer, OutboundMail, ServiceResult, ServiceSettings, Services};
use wb_ws::{
    AppState, ConnectionConfig, ConnectionLimits, ConnectionRegistry, Metrics, ShutdownCoordinator,
};

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

/// HS256 requires at least 32 bytes
pub const TEST_JWT_SECRET: &str = "test-secret-key-for-integration-tests-min-32-bytes-long";
pub const TEST_PASSWORD: &str = "correct horse battery staple";

#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutboundMail>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<OutboundMail> {
        self.sent.lock().unwrap().clone()
    }

    /// Token from the link in the most recent mail.
    pub fn last_token(&self) -> Option<String> {
        let mail = self.sent().pop()?;
        let start = mail.html.find("token=")? + "token=".len();
        let token: String = mail.html[start..]
            .chars()
            .take_while(|c| *c != '"' && *c != '&')
            .collect();
        Some(token)
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, mail: OutboundMail) -> ServiceResult<()> {
        self.sent.lock().unwrap().push(mail);
        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub mailer: Arc<RecordingMailer>,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub json: Value,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = wb_db::open_in_memory()
            .await
            .expect("Failed to create test pool");
        ModuleRepository::seed(&pool)
            .await
            .expect("Failed to seed modules");

        let mailer = Arc::new(RecordingMailer::default());
        let services = Services::new(
            pool,
            ServiceSettings {
                jwt_secret: TEST_JWT_SECRET.to_string(),
                token_lifetimes: TokenLifetimes::default(),
                reset_link_base: "http://localhost:3000/reset-password".to_string(),
                invite_link_base: "http://localhost:3000/accept-invite".to_string(),
            },
            Arc::new(LogNotifier),
            mailer.clone(),
        );

        let state = AppState {
            services,
            rate_limiter_factory: RateLimiterFactory::new(RateLimitConfig::default()),
            registry: ConnectionRegistry::new(ConnectionLimits { max_total: 100 }),
            metrics: Metrics::new(),
            shutdown: ShutdownCoordinator::new(),
            config: ConnectionConfig::default(),
        };

        Self {
            router: build_router(state.clone()),
            state,
            mailer,
        }
    }

    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, json }
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.send("POST", uri, Some(body), None).await
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send("GET", uri, None, None).await
    }

    /// Signs up through the API and returns the new user's id.
    pub async fn signup(&self, email: &str, fullname: &str) -> Uuid {
        let response = self
            .post(
                "/api/auth/signup",
                serde_json::json!({
                    "email": email,
                    "password": TEST_PASSWORD,
                    "fullname": fullname,
                }),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        Uuid::parse_str(response.json["user"]["userId"].as_str().unwrap()).unwrap()
    }

    pub fn session_token(&self, user_id: Uuid) -> String {
        TokenIssuer::with_hs256(TEST_JWT_SECRET.as_bytes(), TokenLifetimes::default())
            .session(user_id)
            .expect("Failed to sign session token")
    }

    pub async fn create_workspace(&self, creator: Uuid, name: &str) -> Workspace {
        self.state
            .services
            .workspaces
            .add(
                None,
                NewWorkspace {
                    workspace_name: name.to_string(),
                    description: None,
                },
                creator,
            )
            .await
            .expect("Failed to create workspace")
    }
}
