use crate::ConnectionId;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Information about an active connection
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    pub connection_id: ConnectionId,
    pub user_id: Uuid,
    pub connected_at: DateTime<Utc>,
}
