pub mod identity_service;
pub mod login_session;
pub mod signup_request;
