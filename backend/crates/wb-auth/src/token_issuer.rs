use crate::{AuthError, Claims, Result as AuthErrorResult, TokenPurpose};

use std::panic::Location;
use std::time::Duration;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

/// Lifetimes for each kind of token.
#[derive(Debug, Clone, Copy)]
pub struct TokenLifetimes {
    pub session: Duration,
    pub password_reset: Duration,
    pub invite: Duration,
}

impl Default for TokenLifetimes {
    fn default() -> Self {
        Self {
            session: Duration::from_secs(3600),
            password_reset: Duration::from_secs(3600),
            invite: Duration::from_secs(7 * 24 * 3600),
        }
    }
}

/// Signs HS256 tokens with the same secret the [`crate::JwtValidator`] checks.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    lifetimes: TokenLifetimes,
}

impl TokenIssuer {
    pub fn with_hs256(secret: &[u8], lifetimes: TokenLifetimes) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            lifetimes,
        }
    }

    pub fn lifetimes(&self) -> TokenLifetimes {
        self.lifetimes
    }

    #[track_caller]
    pub fn session(&self, user_id: Uuid) -> AuthErrorResult<String> {
        let claims = self.claims(user_id, TokenPurpose::Session, self.lifetimes.session);
        self.sign(&claims)
    }

    #[track_caller]
    pub fn password_reset(&self, user_id: Uuid, email: &str) -> AuthErrorResult<String> {
        let mut claims = self.claims(
            user_id,
            TokenPurpose::PasswordReset,
            self.lifetimes.password_reset,
        );
        claims.email = Some(email.to_string());
        self.sign(&claims)
    }

    #[track_caller]
    pub fn invite(
        &self,
        user_id: Uuid,
        email: &str,
        workspace_id: Uuid,
        role: &str,
        inviter_id: Uuid,
    ) -> AuthErrorResult<String> {
        let mut claims = self.claims(user_id, TokenPurpose::Invite, self.lifetimes.invite);
        claims.email = Some(email.to_string());
        claims.workspace_id = Some(workspace_id.to_string());
        claims.role = Some(role.to_string());
        claims.inviter_id = Some(inviter_id.to_string());
        self.sign(&claims)
    }

    fn claims(&self, user_id: Uuid, purpose: TokenPurpose, ttl: Duration) -> Claims {
        let now = Utc::now().timestamp();
        Claims {
            sub: user_id.to_string(),
            purpose,
            exp: now + ttl.as_secs() as i64,
            iat: now,
            email: None,
            workspace_id: None,
            role: None,
            inviter_id: None,
        }
    }

    #[track_caller]
    fn sign(&self, claims: &Claims) -> AuthErrorResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|source| {
            AuthError::JwtEncode {
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
