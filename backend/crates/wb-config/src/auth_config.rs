use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_INVITE_LINK_BASE, DEFAULT_INVITE_TOKEN_TTL_SECS,
    DEFAULT_RESET_LINK_BASE, DEFAULT_RESET_TOKEN_TTL_SECS, DEFAULT_SESSION_TTL_SECS,
    MIN_JWT_SECRET_LENGTH,
};

use std::time::Duration;

use serde::Deserialize;

/// Token signing and account-recovery settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Required; at least 32 characters.
    pub jwt_secret: Option<String>,
    pub session_ttl_secs: u64,
    pub reset_token_ttl_secs: u64,
    pub invite_token_ttl_secs: u64,
    /// Front-end page that redeems a reset token (`?token=` is appended)
    pub reset_link_base: String,
    /// Front-end page that accepts a workspace invite
    pub invite_link_base: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            reset_token_ttl_secs: DEFAULT_RESET_TOKEN_TTL_SECS,
            invite_token_ttl_secs: DEFAULT_INVITE_TOKEN_TTL_SECS,
            reset_link_base: String::from(DEFAULT_RESET_LINK_BASE),
            invite_link_base: String::from(DEFAULT_INVITE_LINK_BASE),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.jwt_secret {
            None => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret is required (set WB_AUTH_JWT_SECRET)",
                ));
            }
            Some(secret) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_LENGTH
                )));
            }
            Some(_) => {}
        }

        for (name, value) in [
            ("session_ttl_secs", self.session_ttl_secs),
            ("reset_token_ttl_secs", self.reset_token_ttl_secs),
            ("invite_token_ttl_secs", self.invite_token_ttl_secs),
        ] {
            if value == 0 {
                return Err(ConfigError::auth(format!("auth.{} must be > 0", name)));
            }
        }

        Ok(())
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    pub fn reset_token_ttl(&self) -> Duration {
        Duration::from_secs(self.reset_token_ttl_secs)
    }

    pub fn invite_token_ttl(&self) -> Duration {
        Duration::from_secs(self.invite_token_ttl_secs)
    }
}
