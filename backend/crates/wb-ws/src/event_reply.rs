use crate::{ReplyStatus, WsError};

use wb_core::Outcome;

use serde::Serialize;
use serde_json::Value;

/// The single reply sent for each request frame.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventReply {
    pub ack_id: Value,
    pub event: String,
    pub status: ReplyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

impl EventReply {
    pub fn from_outcome(ack_id: Value, event: impl Into<String>, outcome: Outcome<Value>) -> Self {
        let status = ReplyStatus::from(&outcome);
        let (data, message) = match outcome {
            Outcome::Done(data) => (Some(data), None),
            Outcome::NoOp(message) | Outcome::Forbidden(message) => (None, Some(message)),
        };

        Self {
            ack_id,
            event: event.into(),
            status,
            data,
            message,
            code: None,
        }
    }

    pub fn error(
        ack_id: Value,
        event: impl Into<String>,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            ack_id,
            event: event.into(),
            status: ReplyStatus::Error,
            data: None,
            message: Some(message.into()),
            code: Some(code),
        }
    }

    pub fn from_error(ack_id: Value, event: impl Into<String>, error: &WsError) -> Self {
        Self::error(ack_id, event, error.error_code(), error.client_message())
    }
}
