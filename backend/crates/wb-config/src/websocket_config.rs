use crate::ConfigErrorResult;
use crate::bounds::within;

use serde::Deserialize;

pub const MIN_SEND_BUFFER_SIZE: usize = 1;
pub const MAX_SEND_BUFFER_SIZE: usize = 10000;
pub const DEFAULT_SEND_BUFFER_SIZE: usize = 100;

pub(crate) const SEND_BUFFER_SIZE_ENV: &str = "WB_WS_SEND_BUFFER_SIZE";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebSocketConfig {
    /// Event replies queued for one socket before the writer applies
    /// backpressure to its reader.
    pub send_buffer_size: usize,
}

impl Default for WebSocketConfig {
    fn default() -> Self {
        Self {
            send_buffer_size: DEFAULT_SEND_BUFFER_SIZE,
        }
    }
}

impl WebSocketConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        within(
            "websocket",
            "send_buffer_size",
            SEND_BUFFER_SIZE_ENV,
            self.send_buffer_size,
            MIN_SEND_BUFFER_SIZE,
            MAX_SEND_BUFFER_SIZE,
        )
    }
}
