use crate::{Notifier, ServiceResult, templates};

use wb_core::{Document, ItemKind, Notification, User};
use wb_db::DocumentRepository;

use std::sync::Arc;

use log::{debug, warn};
use sqlx::SqlitePool;

/// Records an in-app notification on the user and forwards it to the
/// external notifier.
///
/// Runs after the membership change has been persisted, so neither step can
/// fail the caller's operation; failures are logged and swallowed.
#[derive(Clone)]
pub struct NotificationDispatcher {
    pool: SqlitePool,
    notifier: Arc<dyn Notifier>,
}

impl NotificationDispatcher {
    pub fn new(pool: SqlitePool, notifier: Arc<dyn Notifier>) -> Self {
        Self { pool, notifier }
    }

    pub async fn member_assigned(&self, user: &User, kind: ItemKind, item_name: &str) {
        let message = templates::member_assigned(&user.fullname, kind, item_name);
        self.deliver(user, message).await;
    }

    pub async fn member_removed(&self, user: &User, kind: ItemKind, item_name: &str) {
        let message = templates::member_removed(&user.fullname, kind, item_name);
        self.deliver(user, message).await;
    }

    async fn deliver(&self, user: &User, message: String) {
        if let Err(e) = self.record(user, &message).await {
            warn!("Failed to record notification for user {}: {}", user.id, e);
        }

        if let Err(e) = self.notifier.notify(&user.email, &message).await {
            warn!("Failed to deliver notification to {}: {}", user.email, e);
        }
    }

    async fn record(&self, user: &User, message: &str) -> ServiceResult<()> {
        // Reload so notifications appended concurrently are not overwritten
        // by a stale copy.
        let Some(mut current) =
            DocumentRepository::find_by_id::<User, _>(&self.pool, user.id).await?
        else {
            debug!("User {} vanished before notification was recorded", user.id);
            return Ok(());
        };

        current.notifications.push(Notification::unread(message));
        current.touch();
        DocumentRepository::save(&self.pool, &current).await?;
        Ok(())
    }
}
