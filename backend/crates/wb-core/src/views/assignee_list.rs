use crate::AssigneeView;

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeList {
    pub assigned_to_id: Vec<AssigneeView>,
}
