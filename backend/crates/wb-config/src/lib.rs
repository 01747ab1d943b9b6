mod auth_config;
mod bounds;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod notification_config;
mod rate_limit_config;
mod server_config;
mod websocket_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use notification_config::NotificationConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;
pub use websocket_config::WebSocketConfig;

const CONFIG_DIR_ENV: &str = "WB_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".wb";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_MAX_CONNECTIONS: usize = 1000;
const MIN_MAX_CONNECTIONS: usize = 1;
const MAX_MAX_CONNECTIONS: usize = 100_000;

const DEFAULT_DATABASE_FILENAME: &str = "workboard.db";
const DEFAULT_DATABASE_POOL_SIZE: u32 = 10;

const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_SESSION_TTL_SECS: u64 = 3600;
const DEFAULT_RESET_TOKEN_TTL_SECS: u64 = 3600;
const DEFAULT_INVITE_TOKEN_TTL_SECS: u64 = 7 * 24 * 3600;
const DEFAULT_RESET_LINK_BASE: &str = "http://localhost:3000/reset-password";
const DEFAULT_INVITE_LINK_BASE: &str = "http://localhost:3000/accept-invite";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_MAIL_FROM: &str = "no-reply@workboard.local";

#[cfg(test)]
mod tests;
