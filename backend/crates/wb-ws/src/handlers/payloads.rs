//! `data` shapes for each event. Ids arrive as UUID strings; `type` picks
//! the item variant and falls back to the generic item when absent,
//! unknown or not a string.

use crate::{Result as WsErrorResult, WsError};

use wb_core::{NewBoard, NewGroup, NewWorkspace, Outcome, WorkspaceRole};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[track_caller]
pub fn decode<T: DeserializeOwned>(event: &str, data: Value) -> WsErrorResult<T> {
    serde_json::from_value(data)
        .map_err(|e| WsError::invalid_message(format!("Invalid payload for {}: {}", event, e)))
}

/// Wraps a successful result as reply data.
pub fn done<T: Serialize>(value: &T) -> WsErrorResult<Outcome<Value>> {
    Ok(Outcome::Done(serde_json::to_value(value)?))
}

/// Reads `type` leniently: anything but a string counts as absent.
fn discriminator<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(tag)) => Some(tag),
        _ => None,
    })
}

/// Serializes the `Done` value; declined outcomes pass through.
pub fn value_outcome<T: Serialize>(outcome: Outcome<T>) -> WsErrorResult<Outcome<Value>> {
    Ok(match outcome {
        Outcome::Done(value) => Outcome::Done(serde_json::to_value(&value)?),
        Outcome::NoOp(message) => Outcome::NoOp(message),
        Outcome::Forbidden(message) => Outcome::Forbidden(message),
    })
}

/// `Done(message)` becomes `{ "message": ... }`; declined outcomes pass
/// through with their message.
pub fn message_outcome(outcome: Outcome<String>) -> Outcome<Value> {
    outcome.map(|message| serde_json::json!({ "message": message }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModulePayload {
    pub module_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct WorkspaceIdPayload {
    pub id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkspacePayload {
    #[serde(default)]
    pub module_id: Option<Uuid>,
    pub workspace_data: NewWorkspace,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkspacePayload {
    pub id: Uuid,
    pub update_data: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteWorkspacePayload {
    pub id: Uuid,
    pub module_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceMemberPayload {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(default)]
    pub role: Option<WorkspaceRole>,
}

#[derive(Debug, Deserialize)]
pub struct AddBoardPayload {
    pub id: Uuid,
    pub board: NewBoard,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardPayload {
    pub board_id: Uuid,
    #[serde(default, rename = "type", deserialize_with = "discriminator")]
    pub item_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBoardPayload {
    pub board_id: Uuid,
    pub update_data: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddGroupPayload {
    pub board_id: Uuid,
    pub group: NewGroup,
    #[serde(default, rename = "type", deserialize_with = "discriminator")]
    pub item_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPayload {
    pub group_id: Uuid,
    #[serde(default, rename = "type", deserialize_with = "discriminator")]
    pub item_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupPayload {
    pub group_id: Uuid,
    pub update_data: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemToGroupPayload {
    pub group_id: Uuid,
    pub item: Value,
    #[serde(default, rename = "type", deserialize_with = "discriminator")]
    pub item_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateItemPayload {
    pub item: Value,
    #[serde(default, rename = "type", deserialize_with = "discriminator")]
    pub item_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    pub item_id: Uuid,
    #[serde(default, rename = "type", deserialize_with = "discriminator")]
    pub item_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemPayload {
    pub item_id: Uuid,
    pub update_data: Value,
    #[serde(default, rename = "type", deserialize_with = "discriminator")]
    pub item_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemMemberPayload {
    pub item_id: Uuid,
    pub user_id: Uuid,
    #[serde(default, rename = "type", deserialize_with = "discriminator")]
    pub item_type: Option<String>,
}
