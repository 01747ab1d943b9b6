use crate::bounds::within;
use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_MAX_CONNECTIONS, DEFAULT_PORT,
    MAX_MAX_CONNECTIONS, MIN_MAX_CONNECTIONS, MIN_PORT,
};

use serde::Deserialize;

pub(crate) const HOST_ENV: &str = "WB_SERVER_HOST";
pub(crate) const PORT_ENV: &str = "WB_SERVER_PORT";
pub(crate) const MAX_CONNECTIONS_ENV: &str = "WB_SERVER_MAX_CONNECTIONS";

/// Listener for the REST API and the `/ws` event socket.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Open event sockets allowed at once; further upgrades get 503.
    pub max_connections: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 binds an ephemeral port.
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::setting(
                "server",
                format!(
                    "server.port = {} is privileged; use 0 or a port from {} ({})",
                    self.port, MIN_PORT, PORT_ENV
                ),
            ));
        }

        within(
            "server",
            "max_connections",
            MAX_CONNECTIONS_ENV,
            self.max_connections,
            MIN_MAX_CONNECTIONS,
            MAX_MAX_CONNECTIONS,
        )
    }
}
