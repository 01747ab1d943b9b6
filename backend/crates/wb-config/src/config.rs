use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, LoggingConfig, NotificationConfig, RateLimitConfig, ServerConfig,
    WebSocketConfig,
};
use crate::rate_limit_config::{MAX_REQUESTS_ENV, WINDOW_SECS_ENV};
use crate::server_config::{HOST_ENV, MAX_CONNECTIONS_ENV, PORT_ENV};
use crate::websocket_config::SEND_BUFFER_SIZE_ENV;

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub websocket: WebSocketConfig,
    pub rate_limit: RateLimitConfig,
    pub notification: NotificationConfig,
}

impl Config {
    /// Loading order:
    /// 1. `.env` in the working directory, if present
    /// 2. `WB_CONFIG_DIR`, else `./.wb/` (created if missing)
    /// 3. `config.toml` in that directory, else defaults
    /// 4. `WB_*` environment overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }

        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: WB_CONFIG_DIR env var > ./.wb/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir().map_err(|source| ConfigError::Io {
            path: PathBuf::from("."),
            source,
        })?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.websocket.validate()?;
        self.rate_limit.validate()?;
        self.notification.validate()?;
        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute log file path when file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(filename) => {
                let dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Never logs secrets.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max {} connections)",
            self.server.host, self.server.port, self.server.max_connections
        );
        info!(
            "  database: {} (pool {})",
            self.database.path, self.database.pool_size
        );
        info!(
            "  auth: HS256, session={}s, reset={}s, invite={}s",
            self.auth.session_ttl_secs,
            self.auth.reset_token_ttl_secs,
            self.auth.invite_token_ttl_secs
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!("  websocket: buffer={}", self.websocket.send_buffer_size);
        info!(
            "  rate_limit: {}/{}s",
            self.rate_limit.max_requests, self.rate_limit.window_secs
        );
        info!(
            "  notification: webhook {}",
            if self.notification.webhook_url.is_some() {
                "configured"
            } else {
                "disabled (log only)"
            }
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string(HOST_ENV, &mut self.server.host);
        Self::apply_env_parse(PORT_ENV, &mut self.server.port);
        Self::apply_env_parse(MAX_CONNECTIONS_ENV, &mut self.server.max_connections);

        // Database
        Self::apply_env_string("WB_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse("WB_DATABASE_POOL_SIZE", &mut self.database.pool_size);

        // Auth
        Self::apply_env_option_string("WB_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("WB_AUTH_SESSION_TTL_SECS", &mut self.auth.session_ttl_secs);
        Self::apply_env_parse(
            "WB_AUTH_RESET_TOKEN_TTL_SECS",
            &mut self.auth.reset_token_ttl_secs,
        );
        Self::apply_env_parse(
            "WB_AUTH_INVITE_TOKEN_TTL_SECS",
            &mut self.auth.invite_token_ttl_secs,
        );
        Self::apply_env_string("WB_AUTH_RESET_LINK_BASE", &mut self.auth.reset_link_base);
        Self::apply_env_string("WB_AUTH_INVITE_LINK_BASE", &mut self.auth.invite_link_base);

        // Logging
        Self::apply_env_parse("WB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("WB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("WB_LOG_FILE", &mut self.logging.file);

        // WebSocket
        Self::apply_env_parse(SEND_BUFFER_SIZE_ENV, &mut self.websocket.send_buffer_size);

        // Rate limit
        Self::apply_env_parse(MAX_REQUESTS_ENV, &mut self.rate_limit.max_requests);
        Self::apply_env_parse(WINDOW_SECS_ENV, &mut self.rate_limit.window_secs);

        // Notification
        Self::apply_env_option_string(
            "WB_NOTIFICATION_WEBHOOK_URL",
            &mut self.notification.webhook_url,
        );
        Self::apply_env_string("WB_NOTIFICATION_MAIL_FROM", &mut self.notification.mail_from);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored.
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
