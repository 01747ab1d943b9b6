pub mod claims;
pub mod connection_rate_limiter;
pub mod error;
pub mod jwt_validator;
pub mod password;
pub mod rate_limit_config;
pub mod rate_limiter_factory;
pub mod token_issuer;
pub mod token_purpose;

pub use claims::Claims;
pub use connection_rate_limiter::ConnectionRateLimiter;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
pub use password::{hash_password, verify_password};
pub use rate_limit_config::RateLimitConfig;
pub use rate_limiter_factory::RateLimiterFactory;
pub use token_issuer::{TokenIssuer, TokenLifetimes};
pub use token_purpose::TokenPurpose;

#[cfg(test)]
mod tests;
