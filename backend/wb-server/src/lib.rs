pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{
            check_email, forgot_password, login, logout, oauth_login, reset_password, signup,
            verify_token,
        },
        email_request::EmailRequest,
        login_request::LoginRequest,
        login_response::LoginResponse,
        oauth_request::OAuthRequest,
        reset_password_request::ResetPasswordRequest,
        signup_response::SignupResponse,
        verify_token_response::VerifyTokenResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::{api_json::ApiJson, auth_user::AuthUser},
    message_response::MessageResponse,
    modules::{module_list_response::ModuleListResponse, modules::list_modules},
    users::{
        check_role_request::CheckRoleRequest,
        mark_read_response::MarkReadResponse,
        notification_list_response::NotificationListResponse,
        role_response::RoleResponse,
        user_details_response::UserDetailsResponse,
        user_list_response::UserListResponse,
        users::{check_role, get_user, list_notifications, list_users, mark_notifications_read},
    },
    workspaces::{
        accept_invite_request::AcceptInviteRequest,
        invite_request::InviteRequest,
        workspaces::{accept_invite, invite_member},
    },
};

pub use crate::error::ServerError;
pub use crate::routes::build_router;
pub use crate::state::{build_app_state, service_settings};
