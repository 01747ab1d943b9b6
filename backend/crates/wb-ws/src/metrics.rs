use metrics::{counter, gauge, histogram};

/// Counters for the real-time channel.
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "wb_ws" }
    }

    pub fn connection_established(&self) {
        counter!(format!("{}.connections.established", self.prefix)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).increment(1.0);
    }

    pub fn connection_closed(&self, reason: &str) {
        counter!(format!("{}.connections.closed", self.prefix)).increment(1);
        counter!(format!("{}.connections.closed.{}", self.prefix, reason)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).decrement(1.0);
    }

    pub fn event_received(&self, event: &str) {
        counter!(format!("{}.events.received", self.prefix)).increment(1);
        counter!(format!("{}.events.received.{}", self.prefix, event)).increment(1);
    }

    pub fn reply_sent(&self, status: &str) {
        counter!(format!("{}.replies.sent", self.prefix)).increment(1);
        counter!(format!("{}.replies.sent.{}", self.prefix, status)).increment(1);
    }

    pub fn error_occurred(&self, error_type: &str) {
        counter!(format!("{}.errors.total", self.prefix)).increment(1);
        counter!(format!("{}.errors.{}", self.prefix, error_type)).increment(1);
    }

    pub fn event_latency(&self, duration: std::time::Duration) {
        histogram!(format!("{}.events.latency_ms", self.prefix))
            .record(duration.as_millis() as f64);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
