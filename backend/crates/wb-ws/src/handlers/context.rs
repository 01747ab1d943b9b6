use crate::{ConnectionId, RequestContext};

use wb_service::Services;

use uuid::Uuid;

/// Everything a handler needs for one event.
#[derive(Clone)]
pub struct HandlerContext {
    /// Session owner; acts as creator and admin for membership changes
    pub user_id: Uuid,
    pub services: Services,
    pub request_ctx: RequestContext,
}

impl HandlerContext {
    pub fn new(
        user_id: Uuid,
        services: Services,
        connection_id: ConnectionId,
        ack_label: &str,
    ) -> Self {
        Self {
            user_id,
            services,
            request_ctx: RequestContext::new(user_id, connection_id, ack_label),
        }
    }

    pub fn log_prefix(&self) -> String {
        self.request_ctx.log_prefix()
    }
}

impl std::fmt::Debug for HandlerContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerContext")
            .field("user_id", &self.user_id)
            .field("correlation_id", &self.request_ctx.correlation_id)
            .finish()
    }
}
