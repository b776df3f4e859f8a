//! HTTP server lifecycle: bind, serve, shut down.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use gantry_rpc::Dispatcher;

use crate::error::TransportError;
use crate::router::{build_router, AppState};

/// The gantry HTTP server.
pub struct HttpServer {
    addr: SocketAddr,
    state: AppState,
}

impl HttpServer {
    /// Creates a server that will bind `addr` and serve `dispatcher`.
    pub fn new(dispatcher: Arc<Dispatcher>, addr: SocketAddr) -> Self {
        Self {
            addr,
            state: AppState { dispatcher },
        }
    }

    /// The address the server will bind.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Binds the listener and serves until the connection loop ends.
    pub async fn run(self) -> Result<(), TransportError> {
        let listener = TcpListener::bind(self.addr)
            .await
            .map_err(|source| TransportError::Bind {
                addr: self.addr.to_string(),
                source,
            })?;
        info!(addr = %self.addr, "rpc server listening");

        let router = build_router(self.state);
        axum::serve(listener, router)
            .await
            .map_err(|err| TransportError::Serve(err.to_string()))?;
        Ok(())
    }
}
