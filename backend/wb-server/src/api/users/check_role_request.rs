use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRoleRequest {
    pub workspace_id: Uuid,
    pub user_id: Uuid,
}
