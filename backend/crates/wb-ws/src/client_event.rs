use crate::{Result as WsErrorResult, WsError};

use serde::Deserialize;
use serde_json::Value;

/// One request frame: `{ "event", "ackId", "data" }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientEvent {
    pub event: String,
    /// Echoed back untouched so the client can pair reply and request
    #[serde(default)]
    pub ack_id: Value,
    #[serde(default)]
    pub data: Value,
}

impl ClientEvent {
    #[track_caller]
    pub fn parse(text: &str) -> WsErrorResult<Self> {
        let event: Self = serde_json::from_str(text)
            .map_err(|e| WsError::invalid_message(format!("Malformed frame: {}", e)))?;

        if event.event.trim().is_empty() {
            return Err(WsError::invalid_message("Event name is required"));
        }

        Ok(event)
    }

    /// Ack id as plain text for log correlation.
    pub fn ack_label(&self) -> String {
        match &self.ack_id {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
