pub mod check_role_request;
pub mod mark_read_response;
pub mod notification_list_response;
pub mod role_response;
pub mod user_details_response;
pub mod user_list_response;
#[allow(clippy::module_inception)]
pub mod users;
