pub mod accept_invite_request;
pub mod invite_request;
#[allow(clippy::module_inception)]
pub mod workspaces;
