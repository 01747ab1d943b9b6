use wb_auth::AuthError;
use wb_core::CoreError;
use wb_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Message shown to clients for anything they cannot act on.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong!";

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    /// A reference points at a document that has no owner (e.g. a group no
    /// board lists). Distinct from not-found: the input was valid.
    #[error("Inconsistent state: {message} {location}")]
    InconsistentState {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Database {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Auth error: {source} {location}")]
    Auth {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },

    #[error("Delivery failed: {message} {location}")]
    Delivery {
        message: String,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ServiceError {
    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn inconsistent(message: impl Into<String>) -> Self {
        Self::InconsistentState {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn delivery(message: impl Into<String>) -> Self {
        Self::Delivery {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict { .. } => "CONFLICT",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::InconsistentState { .. } => "INCONSISTENT_STATE",
            Self::Database { .. }
            | Self::Auth { .. }
            | Self::Delivery { .. }
            | Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Text safe to show a client. Infrastructure failures collapse to a
    /// generic message; the detail stays in the logs.
    pub fn client_message(&self) -> String {
        match self {
            Self::NotFound { message, .. }
            | Self::Conflict { message, .. }
            | Self::Validation { message, .. }
            | Self::InconsistentState { message, .. } => message.clone(),
            Self::InvalidCredentials { .. } => "Invalid credentials".to_string(),
            Self::TokenExpired { .. } => "Token expired".to_string(),
            Self::InvalidToken { .. } => "Invalid token".to_string(),
            Self::Database { .. }
            | Self::Auth { .. }
            | Self::Delivery { .. }
            | Self::Internal { .. } => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Database { .. }
                | Self::Auth { .. }
                | Self::Delivery { .. }
                | Self::Internal { .. }
        )
    }
}

impl From<DbError> for ServiceError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Database {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for ServiceError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::from(DbError::from(source))
    }
}

impl From<CoreError> for ServiceError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match error {
            CoreError::Validation { message, field, .. } => Self::Validation {
                message,
                field,
                location,
            },
            CoreError::InvalidModuleName { value, .. } => Self::Validation {
                message: format!("Unknown module '{}'", value),
                field: Some("moduleName".to_string()),
                location,
            },
            CoreError::InvalidRole { value, .. } => Self::Validation {
                message: format!("Unknown role '{}'", value),
                field: Some("role".to_string()),
                location,
            },
            CoreError::Serialization { source, .. } => Self::Validation {
                message: source.to_string(),
                field: None,
                location,
            },
        }
    }
}

impl From<AuthError> for ServiceError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match source {
            AuthError::TokenExpired { .. } => Self::TokenExpired { location },
            rejection if rejection.is_token_rejection() => Self::InvalidToken {
                message: rejection.to_string(),
                location,
            },
            other => Self::Auth {
                source: other,
                location,
            },
        }
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
