pub mod auth;
pub mod error;
pub mod extractors;
pub mod message_response;
pub mod modules;
pub mod users;
pub mod workspaces;
