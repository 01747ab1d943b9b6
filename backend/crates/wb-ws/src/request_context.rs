use crate::ConnectionId;

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use uuid::Uuid;

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Correlation data for one event on one connection.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The client's ack id when it sent one, else a generated id
    pub correlation_id: String,
    /// Sequence number within this server instance
    pub request_seq: u64,
    pub user_id: Uuid,
    pub connection_id: ConnectionId,
    pub started_at: Instant,
}

impl RequestContext {
    pub fn new(user_id: Uuid, connection_id: ConnectionId, ack_id: &str) -> Self {
        let request_seq = REQUEST_COUNTER.fetch_add(1, Ordering::SeqCst);

        let correlation_id = if ack_id.is_empty() {
            format!("req-{}-{}", request_seq, Uuid::new_v4().as_simple())
        } else {
            ack_id.to_string()
        };

        Self {
            correlation_id,
            request_seq,
            user_id,
            connection_id,
            started_at: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }

    pub fn log_prefix(&self) -> String {
        let user = self.user_id.to_string();
        let conn = self.connection_id.to_string();
        format!(
            "[req={} user={} conn={}]",
            truncate(&self.correlation_id, 8),
            truncate(&user, 8),
            truncate(&conn, 8)
        )
    }
}

fn truncate(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}
