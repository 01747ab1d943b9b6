pub mod log_mailer;
pub mod log_notifier;
pub mod mailer;
pub mod notification_dispatcher;
pub mod notifier;
pub mod templates;
pub mod webhook_notifier;
