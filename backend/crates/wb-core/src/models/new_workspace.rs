use serde::Deserialize;

/// Client payload for workspace creation. Any `members` or `createdBy` the
/// client sends is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkspace {
    pub workspace_name: String,
    #[serde(default)]
    pub description: Option<String>,
}
