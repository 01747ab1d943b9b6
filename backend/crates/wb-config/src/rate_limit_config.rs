use crate::ConfigErrorResult;
use crate::bounds::within;

use serde::Deserialize;

pub const MIN_RATE_LIMIT_REQUESTS: u32 = 1;
pub const MAX_RATE_LIMIT_REQUESTS: u32 = 10000;
pub const DEFAULT_RATE_LIMIT_REQUESTS: u32 = 100;

pub const MIN_RATE_LIMIT_WINDOW_SECS: u64 = 1;
pub const MAX_RATE_LIMIT_WINDOW_SECS: u64 = 3600;
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;

pub(crate) const MAX_REQUESTS_ENV: &str = "WB_RATE_LIMIT_MAX_REQUESTS";
pub(crate) const WINDOW_SECS_ENV: &str = "WB_RATE_LIMIT_WINDOW_SECS";

/// Event budget for one socket: `max_requests` per `window_secs`, refilled
/// gradually. Events over budget get a `RATE_LIMITED` reply.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_RATE_LIMIT_REQUESTS,
            window_secs: DEFAULT_RATE_LIMIT_WINDOW_SECS,
        }
    }
}

impl RateLimitConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        within(
            "rate_limit",
            "max_requests",
            MAX_REQUESTS_ENV,
            self.max_requests,
            MIN_RATE_LIMIT_REQUESTS,
            MAX_RATE_LIMIT_REQUESTS,
        )?;
        within(
            "rate_limit",
            "window_secs",
            WINDOW_SECS_ENV,
            self.window_secs,
            MIN_RATE_LIMIT_WINDOW_SECS,
            MAX_RATE_LIMIT_WINDOW_SECS,
        )
    }
}
