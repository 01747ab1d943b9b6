use crate::User;

use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeView {
    pub user_id: Uuid,
    pub email: String,
    pub fullname: String,
}

impl From<&User> for AssigneeView {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            fullname: user.fullname.clone(),
        }
    }
}
