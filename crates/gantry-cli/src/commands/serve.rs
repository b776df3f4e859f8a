//! `gantry serve` command.
//!
//! Boots the JSON-RPC HTTP server: config banner, optional cache
//! connection, built-in method registration, then bind and serve.

use std::sync::Arc;

use clap::Args;

use gantry_config::GantryConfig;
use gantry_rpc::methods::{EchoMethod, PingMethod};
use gantry_rpc::{Dispatcher, MethodRegistry};
use gantry_store_redis::CacheStore;
use gantry_transport_http::HttpServer;

/// Start the JSON-RPC HTTP server.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// TCP port override; defaults to the configured service port.
    #[arg(long)]
    pub port: Option<u16>,
}

/// Executes the serve command.
pub async fn execute(args: &ServeArgs, config: &GantryConfig) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    println!("Config loaded successfully!");

    // Held for the life of the server; dropping it closes the connection.
    let cache = CacheStore::connect(&config.cache).await?;
    if cache.is_none() {
        tracing::info!("no cache configured, continuing without one");
    }

    let registry = Arc::new(MethodRegistry::new());
    registry.register(Arc::new(PingMethod));
    registry.register(Arc::new(EchoMethod));
    tracing::info!(methods = ?registry.method_names(), "rpc methods registered");

    let mut service = config.service.clone();
    if let Some(port) = args.port {
        service.port = port;
    }
    let addr = service.socket_addr().map_err(|err| {
        anyhow::anyhow!("invalid service address {}:{}: {err}", service.host, service.port)
    })?;

    let dispatcher = Arc::new(Dispatcher::new(registry));
    let server = HttpServer::new(dispatcher, addr);

    tokio::select! {
        result = server.run() => {
            result.map_err(|e| anyhow::anyhow!("server error: {e}"))?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    Ok(())
}
