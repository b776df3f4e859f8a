//! File templates for `gantry init` scaffolding.
//! Uses `__PLACEHOLDER__` substitution to avoid brace escaping in generated Rust.

/// Cargo.toml template for a new gantry application.
///
/// Placeholders: `__APP_NAME__`
pub const APP_CARGO_TOML: &str = r#"[package]
name = "__APP_NAME__"
version = "0.1.0"
edition = "2021"

# Standalone package, not a member of the enclosing gantry workspace.
[workspace]

[dependencies]
gantry-config = { path = "../crates/gantry-config" }
gantry-rpc = { path = "../crates/gantry-rpc" }
gantry-store-redis = { path = "../crates/gantry-store-redis" }
gantry-transport-http = { path = "../crates/gantry-transport-http" }

anyhow = "1"
async-trait = "0.1"
serde_json = "1"
tokio = { version = "1", features = ["full"] }
tracing = "0.1"
tracing-subscriber = { version = "0.3", features = ["env-filter"] }
"#;

/// configs/config.toml template for a new gantry application.
///
/// Placeholders: `__HTTP_PORT__`
pub const CONFIG_TOML: &str = r#"[service]
host = "127.0.0.1"
port = __HTTP_PORT__
debug = true

[logging]
level = "info"

# Uncomment to connect a Redis cache at boot.
# [cache]
# addr = "127.0.0.1:6379"
# db = 0
"#;

/// src/main.rs template for a new gantry application.
pub const MAIN_RS: &str = r##"use std::sync::Arc;

use gantry_rpc::methods::{EchoMethod, PingMethod};
use gantry_rpc::{Dispatcher, MethodRegistry};
use gantry_store_redis::CacheStore;
use gantry_transport_http::HttpServer;

mod methods;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = gantry_config::load_config(Some("configs/config.toml"))?;
    tracing_subscriber::fmt()
        .with_env_filter(config.logging.level.as_str())
        .init();

    println!("{}", serde_json::to_string_pretty(&config)?);
    println!("Config loaded successfully!");

    let cache = CacheStore::connect(&config.cache).await?;
    if cache.is_none() {
        tracing::info!("no cache configured, continuing without one");
    }

    let registry = Arc::new(MethodRegistry::new());
    registry.register(Arc::new(PingMethod));
    registry.register(Arc::new(EchoMethod));
    registry.register(Arc::new(methods::HelloMethod));

    let dispatcher = Arc::new(Dispatcher::new(registry));
    let addr = config.service.socket_addr()?;
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
"##;

/// src/methods.rs template for a new gantry application.
///
/// Uses `r##"..."##` delimiter so the template can contain `"#` sequences.
pub const METHODS_RS: &str = r##"use async_trait::async_trait;
use gantry_rpc::{MethodContext, MethodError, RpcMethod};
use serde_json::{json, Value};

/// Example method. Replace with your own.
pub struct HelloMethod;

#[async_trait]
impl RpcMethod for HelloMethod {
    fn name(&self) -> &str {
        "hello"
    }

    async fn execute(
        &self,
        _ctx: &MethodContext,
        params: Option<Value>,
    ) -> Result<Value, MethodError> {
        let who = params
            .as_ref()
            .and_then(|p| p.get("name"))
            .and_then(Value::as_str)
            .unwrap_or("world");
        Ok(json!({ "message": format!("hello, {who}") }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn greets_by_name() {
        let ctx = MethodContext::new("hello", "1");
        let result = HelloMethod
            .execute(&ctx, Some(json!({"name": "gantry"})))
            .await
            .unwrap();
        assert_eq!(result["message"], "hello, gantry");
    }

    #[tokio::test]
    async fn greets_world_by_default() {
        let ctx = MethodContext::new("hello", "1");
        let result = HelloMethod.execute(&ctx, None).await.unwrap();
        assert_eq!(result["message"], "hello, world");
    }
}
"##;

/// .gitignore template.
pub const GITIGNORE: &str = "target/\n";

/// Applies placeholder substitutions to a template string.
///
/// `substitutions` is a slice of `(placeholder, value)` pairs.
pub fn apply(template: &str, substitutions: &[(&str, &str)]) -> String {
    substitutions
        .iter()
        .fold(template.to_string(), |acc, (key, val)| {
            acc.replace(key, val)
        })
}
