use crate::{ItemHandler, NotificationDispatcher, ServiceResult, VariantHandler};

use wb_core::{
    AnyItem, AssigneeList, BoardView, Bug, Contact, CreatedItem, Group, Incident, Item, ItemKind,
    Lead, NewGroup, Outcome, Sprint, Task, Ticket,
};

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use serde_json::Value;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Routes board and item operations to the handler selected by the
/// request's `type` discriminator.
///
/// Lookup is an exact, case-sensitive match on the variant tag; anything
/// unregistered (absent, `"Item"`, `"ticket"`, garbage) falls through to the
/// generic handler. The router never fails on its own.
#[derive(Clone)]
pub struct TypeDispatchRouter {
    handlers: Arc<HashMap<&'static str, Arc<dyn ItemHandler>>>,
    fallback: Arc<dyn ItemHandler>,
}

impl TypeDispatchRouter {
    /// Registers every built-in variant with the generic `Item` as fallback.
    pub fn new(pool: SqlitePool, notifications: NotificationDispatcher) -> Self {
        let handler = |kind: ItemKind| -> Arc<dyn ItemHandler> {
            let pool = pool.clone();
            let notifications = notifications.clone();
            match kind {
                ItemKind::Item => Arc::new(VariantHandler::<Item>::new(pool, notifications)),
                ItemKind::Task => Arc::new(VariantHandler::<Task>::new(pool, notifications)),
                ItemKind::Bug => Arc::new(VariantHandler::<Bug>::new(pool, notifications)),
                ItemKind::Sprint => Arc::new(VariantHandler::<Sprint>::new(pool, notifications)),
                ItemKind::Ticket => Arc::new(VariantHandler::<Ticket>::new(pool, notifications)),
                ItemKind::Incident => {
                    Arc::new(VariantHandler::<Incident>::new(pool, notifications))
                }
                ItemKind::Lead => Arc::new(VariantHandler::<Lead>::new(pool, notifications)),
                ItemKind::Contact => Arc::new(VariantHandler::<Contact>::new(pool, notifications)),
            }
        };

        let specific = ItemKind::ALL
            .into_iter()
            .filter(|kind| *kind != ItemKind::Item)
            .map(&handler)
            .collect();

        Self::with_handlers(specific, handler(ItemKind::Item))
    }

    /// Builds a router from explicit handlers, keyed by each handler's kind.
    pub fn with_handlers(
        handlers: Vec<Arc<dyn ItemHandler>>,
        fallback: Arc<dyn ItemHandler>,
    ) -> Self {
        let handlers = handlers
            .into_iter()
            .map(|handler| (handler.kind().as_str(), handler))
            .collect();

        Self {
            handlers: Arc::new(handlers),
            fallback,
        }
    }

    pub fn resolve(&self, discriminator: Option<&str>) -> &Arc<dyn ItemHandler> {
        let handler = discriminator
            .and_then(|tag| self.handlers.get(tag))
            .unwrap_or(&self.fallback);
        debug!(
            "Dispatching type {:?} to {} handler",
            discriminator,
            handler.kind()
        );
        handler
    }

    pub async fn fetch_board(
        &self,
        discriminator: Option<&str>,
        board_id: Uuid,
    ) -> ServiceResult<BoardView> {
        self.resolve(discriminator).fetch_board(board_id).await
    }

    pub async fn add_group(
        &self,
        discriminator: Option<&str>,
        board_id: Uuid,
        group: NewGroup,
    ) -> ServiceResult<BoardView> {
        self.resolve(discriminator).add_group(board_id, group).await
    }

    pub async fn remove_group(
        &self,
        discriminator: Option<&str>,
        group_id: Uuid,
    ) -> ServiceResult<BoardView> {
        self.resolve(discriminator).remove_group(group_id).await
    }

    pub async fn add_item_to_group(
        &self,
        discriminator: Option<&str>,
        group_id: Uuid,
        item: Value,
    ) -> ServiceResult<Group> {
        self.resolve(discriminator)
            .add_item_to_group(group_id, item)
            .await
    }

    pub async fn add_item(
        &self,
        discriminator: Option<&str>,
        item: Value,
    ) -> ServiceResult<CreatedItem> {
        self.resolve(discriminator).add_item(item).await
    }

    pub async fn remove_item_from_group(
        &self,
        discriminator: Option<&str>,
        item_id: Uuid,
    ) -> ServiceResult<Group> {
        self.resolve(discriminator)
            .remove_item_from_group(item_id)
            .await
    }

    pub async fn update_item(
        &self,
        discriminator: Option<&str>,
        item_id: Uuid,
        patch: Value,
    ) -> ServiceResult<AnyItem> {
        self.resolve(discriminator).update_item(item_id, patch).await
    }

    pub async fn add_member(
        &self,
        discriminator: Option<&str>,
        item_id: Uuid,
        user_id: Uuid,
    ) -> ServiceResult<AssigneeList> {
        self.resolve(discriminator).add_member(item_id, user_id).await
    }

    pub async fn remove_member(
        &self,
        discriminator: Option<&str>,
        item_id: Uuid,
        user_id: Uuid,
    ) -> ServiceResult<Outcome<AssigneeList>> {
        self.resolve(discriminator)
            .remove_member(item_id, user_id)
            .await
    }
}
