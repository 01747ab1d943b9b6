use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] wb_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] wb_db::DbError),

    #[error("Service setup failed: {0}")]
    Service(#[from] wb_service::ServiceError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Missing setting: {name}")]
    MissingSetting { name: &'static str },
}

pub type Result<T> = std::result::Result<T, ServerError>;
