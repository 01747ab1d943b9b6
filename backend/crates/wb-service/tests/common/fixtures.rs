use super::{RecordingMailer, RecordingNotifier};

use wb_auth::TokenLifetimes;
use wb_core::{BoardSummary, Module, ModuleName, NewBoard, NewWorkspace, User, Workspace};
use wb_db::{DocumentRepository, ModuleRepository};
use wb_service::{Notifier, ServiceSettings, Services};

use std::sync::Arc;

use sqlx::SqlitePool;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "test-secret-key-that-is-at-least-32-characters";
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Not a real hash; fixture users cannot log in with a password.
const PLACEHOLDER_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaA";

pub fn test_settings() -> ServiceSettings {
    ServiceSettings {
        jwt_secret: TEST_JWT_SECRET.to_string(),
        token_lifetimes: TokenLifetimes::default(),
        reset_link_base: "http://localhost:3000/reset-password".to_string(),
        invite_link_base: "http://localhost:3000/accept-invite".to_string(),
    }
}

pub struct TestContext {
    pub pool: SqlitePool,
    pub services: Services,
    pub notifier: Arc<RecordingNotifier>,
    pub mailer: Arc<RecordingMailer>,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::with_notifier_impl(None).await
    }

    pub async fn with_notifier(notifier: Arc<dyn Notifier>) -> Self {
        Self::with_notifier_impl(Some(notifier)).await
    }

    async fn with_notifier_impl(override_notifier: Option<Arc<dyn Notifier>>) -> Self {
        let pool = wb_db::open_in_memory()
            .await
            .expect("Failed to create test pool");
        ModuleRepository::seed(&pool)
            .await
            .expect("Failed to seed modules");

        let notifier = Arc::new(RecordingNotifier::default());
        let mailer = Arc::new(RecordingMailer::default());
        let active = override_notifier.unwrap_or_else(|| notifier.clone() as Arc<dyn Notifier>);

        let services = Services::new(pool.clone(), test_settings(), active, mailer.clone());

        Self {
            pool,
            services,
            notifier,
            mailer,
        }
    }

    pub async fn create_user(&self, email: &str, fullname: &str) -> User {
        let user = User::new(
            email.to_string(),
            PLACEHOLDER_HASH.to_string(),
            fullname.to_string(),
        );
        DocumentRepository::insert(&self.pool, &user)
            .await
            .expect("Failed to insert user");
        user
    }

    pub async fn module(&self, name: ModuleName) -> Module {
        ModuleRepository::find_by_name(&self.pool, name)
            .await
            .expect("Failed to query module")
            .expect("Module was seeded")
    }

    pub async fn create_workspace(
        &self,
        module_id: Uuid,
        creator: Uuid,
        name: &str,
    ) -> Workspace {
        self.services
            .workspaces
            .add(
                Some(module_id),
                NewWorkspace {
                    workspace_name: name.to_string(),
                    description: None,
                },
                creator,
            )
            .await
            .expect("Failed to create workspace")
    }

    pub async fn create_board(
        &self,
        workspace_id: Uuid,
        creator: Uuid,
        name: &str,
    ) -> BoardSummary {
        self.services
            .boards
            .add_board(
                workspace_id,
                NewBoard {
                    board_name: name.to_string(),
                    board_type: None,
                    description: None,
                },
                creator,
            )
            .await
            .expect("Failed to create board")
    }

    /// A creator, a workspace in the work-management module, and one board.
    pub async fn board_setup(&self) -> (User, Workspace, BoardSummary) {
        let creator = self.create_user("owner@example.com", "Olive Owner").await;
        let module = self.module(ModuleName::Workmanagement).await;
        let workspace = self
            .create_workspace(module.id, creator.id, "Operations")
            .await;
        let board = self
            .create_board(workspace.id, creator.id, "Service Desk")
            .await;
        (creator, workspace, board)
    }
}
