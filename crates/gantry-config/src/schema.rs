//! Configuration schema for a gantry service.

use std::net::{AddrParseError, SocketAddr};

use serde::{Deserialize, Serialize};

/// Top-level configuration, assembled by [`load_config`](crate::load_config).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GantryConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// HTTP service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Interface the server binds.
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port the server listens on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Debug mode; lowers the default log level to `debug`.
    #[serde(default)]
    pub debug: bool,
}

impl ServiceConfig {
    /// The configured bind address as `host:port`.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when no `-v` flag overrides it.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// Redis cache settings.
///
/// The cache is optional: with no `addr` configured the server runs
/// without one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheConfig {
    /// `host:port` of the Redis server.
    #[serde(default)]
    pub addr: Option<String>,
    /// Redis logical database index.
    #[serde(default)]
    pub db: i64,
    /// Password, when the server requires AUTH.
    #[serde(default)]
    pub password: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_level() -> String {
    "info".to_string()
}
