//! Server configuration.

use roster_core::constants::{API_PREFIX, DEFAULT_PORT};
use serde::{Deserialize, Serialize};

/// Configuration for the roster server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind (default `"0.0.0.0"`).
    pub host: String,
    /// Port to bind (default `5000`; `0` auto-assigns).
    pub port: u16,
    /// Path the employee routes are mounted under.
    pub api_prefix: String,
}

impl ServerConfig {
    /// `host:port` suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: DEFAULT_PORT,
            api_prefix: API_PREFIX.into(),
        }
    }
}
