use crate::{ApiError, ApiResult};

use wb_core::Outcome;

use serde::Serialize;

/// Body of every endpoint that only reports what happened.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// `Done` and `NoOp` are both 200; `Forbidden` becomes a 403.
    #[track_caller]
    pub fn from_outcome(outcome: Outcome<String>) -> ApiResult<Self> {
        match outcome {
            Outcome::Done(message) | Outcome::NoOp(message) => Ok(Self::new(message)),
            Outcome::Forbidden(message) => Err(ApiError::forbidden(message)),
        }
    }
}
