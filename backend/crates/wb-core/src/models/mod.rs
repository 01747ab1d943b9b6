pub mod board;
pub mod group;
pub mod module;
pub mod module_name;
pub mod new_board;
pub mod new_group;
pub mod new_workspace;
pub mod notification;
pub mod notification_status;
pub mod user;
pub mod workspace;
pub mod workspace_member;
pub mod workspace_role;
