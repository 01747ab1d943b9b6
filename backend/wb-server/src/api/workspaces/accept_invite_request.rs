use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AcceptInviteRequest {
    pub token: String,
}
