//! Cache connection errors.

use thiserror::Error;

/// Errors from establishing the cache connection.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("invalid cache address: {addr}")]
    InvalidAddr { addr: String },

    #[error("failed to connect to cache at {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: redis::RedisError,
    },

    #[error("cache ping failed: {0}")]
    Ping(#[source] redis::RedisError),
}
