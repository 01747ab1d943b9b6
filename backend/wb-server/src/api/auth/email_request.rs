use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct EmailRequest {
    pub email: String,
}
