use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBoard {
    pub board_name: String,
    #[serde(default, rename = "type")]
    pub board_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
