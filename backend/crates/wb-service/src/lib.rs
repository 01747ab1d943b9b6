pub mod board_manager;
pub mod dispatch;
pub mod error;
pub mod identity;
pub mod notification;
pub mod services;
pub mod workspace_manager;

pub use board_manager::BoardManager;
pub use dispatch::board_projection::{assignee_list, project_board};
pub use dispatch::item_handler::ItemHandler;
pub use dispatch::type_dispatch_router::TypeDispatchRouter;
pub use dispatch::variant_handler::VariantHandler;
pub use error::{GENERIC_FAILURE_MESSAGE, ServiceError, ServiceResult};
pub use identity::identity_service::IdentityService;
pub use identity::login_session::LoginSession;
pub use identity::signup_request::SignupRequest;
pub use notification::log_mailer::LogMailer;
pub use notification::log_notifier::LogNotifier;
pub use notification::mailer::{Mailer, OutboundMail};
pub use notification::notification_dispatcher::NotificationDispatcher;
pub use notification::notifier::Notifier;
pub use notification::templates;
pub use notification::webhook_notifier::WebhookNotifier;
pub use services::{ServiceSettings, Services};
pub use workspace_manager::WorkspaceManager;

#[cfg(test)]
mod tests;
