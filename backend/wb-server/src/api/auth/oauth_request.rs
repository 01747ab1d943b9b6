use serde::Deserialize;

/// Profile from an external identity provider that already authenticated
/// the user.
#[derive(Debug, Deserialize)]
pub struct OAuthRequest {
    pub email: String,
    #[serde(default)]
    pub name: String,
}
