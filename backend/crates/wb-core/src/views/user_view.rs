use crate::User;

use serde::Serialize;
use uuid::Uuid;

/// Public rendering of a user. Never carries the credential.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub user_id: Uuid,
    pub email: String,
    pub fullname: String,
    pub img_url: Option<String>,
    pub phonenumber: Option<String>,
    pub country: Option<String>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            fullname: user.fullname.clone(),
            img_url: user.img_url.clone(),
            phonenumber: user.phonenumber.clone(),
            country: user.country.clone(),
        }
    }
}
