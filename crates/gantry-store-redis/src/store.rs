//! Redis-backed cache connection handling.

use redis::aio::MultiplexedConnection;
use redis::{Client, ConnectionAddr, ConnectionInfo, RedisConnectionInfo};
use tracing::info;

use gantry_config::CacheConfig;

use crate::error::CacheError;

/// A live cache connection.
///
/// Construction goes through [`CacheStore::connect`], which verifies
/// the server with a PING before the store is handed out. The
/// multiplexed connection is cheap to clone and safe to share across
/// tasks.
#[derive(Debug)]
pub struct CacheStore {
    conn: MultiplexedConnection,
}

impl CacheStore {
    /// Connects to the cache named in `config`.
    ///
    /// Returns `Ok(None)` when no address is configured; the service
    /// runs without a cache in that case. A configured but unreachable
    /// server is an error.
    pub async fn connect(config: &CacheConfig) -> Result<Option<Self>, CacheError> {
        let Some(addr) = config.addr.as_deref() else {
            return Ok(None);
        };

        let (host, port) = split_addr(addr)?;
        let info = ConnectionInfo {
            addr: ConnectionAddr::Tcp(host, port),
            redis: RedisConnectionInfo {
                db: config.db,
                username: None,
                password: config.password.clone(),
                ..Default::default()
            },
        };

        let client = Client::open(info).map_err(|source| CacheError::Connect {
            addr: addr.to_string(),
            source,
        })?;
        let mut conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|source| CacheError::Connect {
                addr: addr.to_string(),
                source,
            })?;

        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(CacheError::Ping)?;
        info!(addr = %addr, pong = %pong, "cache connected");

        Ok(Some(Self { conn }))
    }

    /// A connection handle for issuing commands.
    pub fn connection(&self) -> MultiplexedConnection {
        self.conn.clone()
    }
}

/// Splits a `host:port` address into its parts.
fn split_addr(addr: &str) -> Result<(String, u16), CacheError> {
    let invalid = || CacheError::InvalidAddr {
        addr: addr.to_string(),
    };
    let (host, port) = addr.rsplit_once(':').ok_or_else(invalid)?;
    if host.is_empty() {
        return Err(invalid());
    }
    let port: u16 = port.parse().map_err(|_| invalid())?;
    Ok((host.to_string(), port))
}
