#[allow(clippy::module_inception)]
pub mod auth;
pub mod email_request;
pub mod login_request;
pub mod login_response;
pub mod oauth_request;
pub mod reset_password_request;
pub mod signup_response;
pub mod verify_token_response;
