use crate::User;

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UserDetails {
    pub fullname: String,
    pub email: String,
    pub picture: Option<String>,
}

impl From<&User> for UserDetails {
    fn from(user: &User) -> Self {
        Self {
            fullname: user.fullname.clone(),
            email: user.email.clone(),
            picture: user.img_url.clone(),
        }
    }
}
