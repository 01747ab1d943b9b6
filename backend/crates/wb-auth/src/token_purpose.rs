use serde::{Deserialize, Serialize};

/// What a token may be used for. A token is only accepted for its own
/// purpose, so a password-reset link cannot open a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenPurpose {
    Session,
    PasswordReset,
    Invite,
}

impl TokenPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Session => "session",
            Self::PasswordReset => "password_reset",
            Self::Invite => "invite",
        }
    }
}
