use crate::handlers::error_codes::{
    INTERNAL_ERROR, INVALID_MESSAGE, RATE_LIMITED, UNAUTHORIZED,
};

use wb_service::{GENERIC_FAILURE_MESSAGE, ServiceError};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WsError {
    #[error("Connection closed: {reason} {location}")]
    ConnectionClosed {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Send buffer full, client too slow {location}")]
    SendBufferFull { location: ErrorLocation },

    #[error("Connection limit exceeded: {current} connections (max: {max}) {location}")]
    ConnectionLimitExceeded {
        current: usize,
        max: usize,
        location: ErrorLocation,
    },

    #[error("Invalid message: {message} {location}")]
    InvalidMessage {
        message: String,
        location: ErrorLocation,
    },

    #[error("Rate limit exceeded {location}")]
    RateLimited { location: ErrorLocation },

    #[error("JSON encode failed: {source} {location}")]
    Encode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl WsError {
    #[track_caller]
    pub fn invalid_message(message: impl Into<String>) -> Self {
        Self::InvalidMessage {
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

    /// Code placed in the `code` field of an error reply.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConnectionClosed { .. } => "CONNECTION_CLOSED",
            Self::SendBufferFull { .. } => "SLOW_CLIENT",
            Self::ConnectionLimitExceeded { .. } => "CONNECTION_LIMIT",
            Self::InvalidMessage { .. } => INVALID_MESSAGE,
            Self::RateLimited { .. } => RATE_LIMITED,
            Self::Service(
                ServiceError::TokenExpired { .. } | ServiceError::InvalidToken { .. },
            ) => UNAUTHORIZED,
            Self::Service(e) => e.error_code(),
            Self::Encode { .. } | Self::Internal { .. } => INTERNAL_ERROR,
        }
    }

    /// Text safe to show the caller. Infrastructure detail never leaves the
    /// server.
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidMessage { message, .. } => message.clone(),
            Self::RateLimited { .. } => "Too many requests, slow down".to_string(),
            Self::Service(e) => e.client_message(),
            Self::ConnectionClosed { .. }
            | Self::SendBufferFull { .. }
            | Self::ConnectionLimitExceeded { .. }
            | Self::Encode { .. }
            | Self::Internal { .. } => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn is_internal(&self) -> bool {
        match self {
            Self::Service(e) => e.is_internal(),
            Self::Encode { .. } | Self::Internal { .. } => true,
            _ => false,
        }
    }
}

impl From<serde_json::Error> for WsError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Encode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, WsError>;
