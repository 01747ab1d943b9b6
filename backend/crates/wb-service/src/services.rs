use crate::{
    BoardManager, IdentityService, Mailer, NotificationDispatcher, Notifier, TypeDispatchRouter,
    WorkspaceManager,
};

use wb_auth::{JwtValidator, TokenIssuer, TokenLifetimes};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Values the service layer needs from configuration.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub jwt_secret: String,
    pub token_lifetimes: TokenLifetimes,
    pub reset_link_base: String,
    pub invite_link_base: String,
}

/// Every service, sharing one pool and one token key. Cheap to clone.
#[derive(Clone)]
pub struct Services {
    pub pool: SqlitePool,
    pub identity: IdentityService,
    pub workspaces: WorkspaceManager,
    pub boards: BoardManager,
    pub items: TypeDispatchRouter,
}

impl Services {
    pub fn new(
        pool: SqlitePool,
        settings: ServiceSettings,
        notifier: Arc<dyn Notifier>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        let secret = settings.jwt_secret.as_bytes();
        let tokens = Arc::new(TokenIssuer::with_hs256(secret, settings.token_lifetimes));
        let validator = Arc::new(JwtValidator::with_hs256(secret));
        let notifications = NotificationDispatcher::new(pool.clone(), notifier);

        Self {
            identity: IdentityService::new(
                pool.clone(),
                tokens.clone(),
                validator.clone(),
                mailer.clone(),
                settings.reset_link_base,
            ),
            workspaces: WorkspaceManager::new(
                pool.clone(),
                tokens,
                validator,
                mailer,
                settings.invite_link_base,
            ),
            boards: BoardManager::new(pool.clone()),
            items: TypeDispatchRouter::new(pool.clone(), notifications),
            pool,
        }
    }
}
