use crate::{CoreError, CoreResult, Document};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use uuid::Uuid;

/// Keys no caller may overwrite on any document.
const IMMUTABLE_KEYS: [&str; 3] = ["id", "createdAt", "updatedAt"];

/// Builds a new document from a client payload.
///
/// Client-supplied `id` and timestamps are discarded and replaced.
#[track_caller]
pub fn new_document<T: Document>(payload: Value) -> CoreResult<T> {
    let mut fields = into_object(payload)?;
    for key in IMMUTABLE_KEYS {
        fields.remove(key);
    }

    let now = Value::String(Utc::now().to_rfc3339());
    fields.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
    fields.insert("createdAt".to_string(), now.clone());
    fields.insert("updatedAt".to_string(), now);

    from_fields(fields)
}

/// Field-level merge with `$set` semantics.
///
/// Keys in `protected` (and ids/timestamps) are ignored so relationship
/// lists stay under the control of the managers that own them.
#[track_caller]
pub fn apply_patch<T>(current: &T, patch: Value, protected: &[&str]) -> CoreResult<T>
where
    T: Serialize + DeserializeOwned,
{
    let updates = into_object(patch)?;

    let mut fields = match serde_json::to_value(current) {
        Ok(Value::Object(fields)) => fields,
        Ok(_) => {
            return Err(CoreError::Validation {
                message: "Document does not serialize to an object".to_string(),
                field: None,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Err(source) => {
            return Err(CoreError::Serialization {
                source,
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };

    for (key, value) in updates {
        if IMMUTABLE_KEYS.contains(&key.as_str()) || protected.contains(&key.as_str()) {
            continue;
        }
        fields.insert(key, value);
    }

    from_fields(fields)
}

#[track_caller]
fn into_object(value: Value) -> CoreResult<Map<String, Value>> {
    match value {
        Value::Object(fields) => Ok(fields),
        other => Err(CoreError::Validation {
            message: format!("Expected a JSON object, got {}", json_kind(&other)),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

#[track_caller]
fn from_fields<T: DeserializeOwned>(fields: Map<String, Value>) -> CoreResult<T> {
    serde_json::from_value(Value::Object(fields)).map_err(|e| CoreError::Validation {
        message: e.to_string(),
        field: None,
        location: ErrorLocation::from(Location::caller()),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
