//! HTTP/JSON-RPC transport for gantry services.
//! Exposes the dispatcher over `POST /api/rpc` plus a `GET /health`
//! liveness probe.

mod error;
mod middleware;
pub mod router;
pub mod server;

pub use error::TransportError;
pub use router::{build_router, AppState};
pub use server::HttpServer;
