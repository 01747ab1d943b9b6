use crate::{ConnectionId, ConnectionInfo, ConnectionLimits, Result as WsErrorResult, WsError};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{info, warn};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Active sockets, bounded by `ConnectionLimits::max_total`.
#[derive(Clone)]
pub struct ConnectionRegistry {
    inner: Arc<RwLock<HashMap<ConnectionId, ConnectionInfo>>>,
    limits: ConnectionLimits,
}

impl ConnectionRegistry {
    pub fn new(limits: ConnectionLimits) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            limits,
        }
    }

    pub async fn register(&self, user_id: Uuid) -> WsErrorResult<ConnectionId> {
        let mut connections = self.inner.write().await;

        if connections.len() >= self.limits.max_total {
            warn!(
                "Total connection limit reached: {}/{}",
                connections.len(),
                self.limits.max_total
            );
            return Err(WsError::ConnectionLimitExceeded {
                current: connections.len(),
                max: self.limits.max_total,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let connection_id = ConnectionId::new();
        connections.insert(
            connection_id,
            ConnectionInfo {
                connection_id,
                user_id,
                connected_at: chrono::Utc::now(),
            },
        );
        info!(
            "Registered connection {connection_id} for user {user_id} ({} total)",
            connections.len()
        );

        Ok(connection_id)
    }

    pub async fn unregister(&self, connection_id: ConnectionId) {
        let mut connections = self.inner.write().await;

        if connections.remove(&connection_id).is_some() {
            info!(
                "Unregistered connection {connection_id} ({} total remaining)",
                connections.len()
            );
        }
    }

    pub async fn get(&self, connection_id: ConnectionId) -> Option<ConnectionInfo> {
        self.inner.read().await.get(&connection_id).cloned()
    }

    pub async fn total_count(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Connections currently open for one user.
    pub async fn user_connection_count(&self, user_id: Uuid) -> usize {
        self.inner
            .read()
            .await
            .values()
            .filter(|info| info.user_id == user_id)
            .count()
    }
}
