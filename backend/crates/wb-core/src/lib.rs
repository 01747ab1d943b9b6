pub mod document;
pub mod error;
pub mod items;
pub mod models;
pub mod outcome;
pub mod patch;
pub mod views;

pub use document::Document;
pub use error::{CoreError, CoreResult};
pub use items::any_item::AnyItem;
pub use items::bug::Bug;
pub use items::contact::Contact;
pub use items::incident::Incident;
pub use items::item::Item;
pub use items::item_kind::ItemKind;
pub use items::item_record::ItemRecord;
pub use items::lead::Lead;
pub use items::sprint::Sprint;
pub use items::task::Task;
pub use items::ticket::Ticket;
pub use models::board::{Board, DEFAULT_BOARD_TYPE};
pub use models::group::Group;
pub use models::module::Module;
pub use models::module_name::ModuleName;
pub use models::new_board::NewBoard;
pub use models::new_group::NewGroup;
pub use models::new_workspace::NewWorkspace;
pub use models::notification::Notification;
pub use models::notification_status::NotificationStatus;
pub use models::user::User;
pub use models::workspace::Workspace;
pub use models::workspace_member::WorkspaceMember;
pub use models::workspace_role::WorkspaceRole;
pub use outcome::Outcome;
pub use patch::{apply_patch, new_document};
pub use views::assignee_list::AssigneeList;
pub use views::assignee_view::AssigneeView;
pub use views::board_summary::BoardSummary;
pub use views::board_view::BoardView;
pub use views::created_item::CreatedItem;
pub use views::group_view::GroupView;
pub use views::item_view::ItemView;
pub use views::member_view::MemberView;
pub use views::user_details::UserDetails;
pub use views::user_view::UserView;
pub use views::workspace_details::WorkspaceDetails;
pub use views::workspace_summary::WorkspaceSummary;
pub use views::workspace_view::WorkspaceView;
