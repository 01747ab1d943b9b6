use crate::{ConnectionRateLimiter, RateLimitConfig};

/// Hands each new socket connection its own limiter.
#[derive(Clone, Default)]
pub struct RateLimiterFactory {
    config: RateLimitConfig,
}

impl RateLimiterFactory {
    pub fn new(config: RateLimitConfig) -> Self {
        Self { config }
    }

    pub fn create(&self) -> ConnectionRateLimiter {
        ConnectionRateLimiter::new(self.config.clone())
    }
}
