//! REST API error types
//!
//! Every failure renders as `{ "message": ..., "code": ... }` with a status
//! derived from the service error kind.

use wb_service::{GENERIC_FAILURE_MESSAGE, ServiceError};

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub message: String,
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Missing or unusable credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Authenticated but not allowed (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Resource already exists (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Unparseable body or path (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
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
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Service(e) => match e {
                ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
                ServiceError::Conflict { .. }
                | ServiceError::Validation { .. }
                | ServiceError::InvalidCredentials { .. } => StatusCode::BAD_REQUEST,
                ServiceError::TokenExpired { .. } | ServiceError::InvalidToken { .. } => {
                    StatusCode::UNAUTHORIZED
                }
                ServiceError::InconsistentState { .. } => StatusCode::CONFLICT,
                ServiceError::Database { .. }
                | ServiceError::Auth { .. }
                | ServiceError::Delivery { .. }
                | ServiceError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
        }
    }

    fn body(self) -> ApiErrorBody {
        match self {
            Self::Service(e) => ApiErrorBody {
                message: e.client_message(),
                code: e.error_code().to_string(),
                field: e.field().map(str::to_string),
            },
            Self::Unauthorized { message, .. } => ApiErrorBody {
                message,
                code: "UNAUTHORIZED".into(),
                field: None,
            },
            Self::Forbidden { message, .. } => ApiErrorBody {
                message,
                code: "FORBIDDEN".into(),
                field: None,
            },
            Self::Conflict { message, .. } => ApiErrorBody {
                message,
                code: "CONFLICT".into(),
                field: None,
            },
            Self::BadRequest { message, .. } => ApiErrorBody {
                message,
                code: "BAD_REQUEST".into(),
                field: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Internals are logged in full; the client only sees the generic text
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let mut body = self.body();
        if status.is_server_error() {
            body.message = GENERIC_FAILURE_MESSAGE.to_string();
        }

        (status, Json(body)).into_response()
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::BadRequest {
            message: format!("Invalid UUID format: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
