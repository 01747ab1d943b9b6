use crate::{AuthError, Result as AuthErrorResult, TokenPurpose};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id. For invites, the invited user.
    pub sub: String,
    pub purpose: TokenPurpose,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Admin who issued an invite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inviter_id: Option<String>,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user_id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.purpose == TokenPurpose::Invite
            && (self.workspace_id.is_none() || self.inviter_id.is_none())
        {
            return Err(AuthError::InvalidClaim {
                claim: "workspace_id".to_string(),
                message: "invite tokens must name a workspace and an inviter".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    #[track_caller]
    pub fn user_id(&self) -> AuthErrorResult<Uuid> {
        parse_uuid_claim("sub", &self.sub)
    }

    #[track_caller]
    pub fn workspace_uuid(&self) -> AuthErrorResult<Uuid> {
        parse_uuid_claim("workspace_id", self.workspace_id.as_deref().unwrap_or_default())
    }

    #[track_caller]
    pub fn inviter_uuid(&self) -> AuthErrorResult<Uuid> {
        parse_uuid_claim("inviter_id", self.inviter_id.as_deref().unwrap_or_default())
    }
}

#[track_caller]
fn parse_uuid_claim(claim: &str, value: &str) -> AuthErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| AuthError::InvalidClaim {
        claim: claim.to_string(),
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
