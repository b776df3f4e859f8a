//! Liveness check method.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::MethodError;
use crate::method::{MethodContext, RpcMethod};

use super::unix_timestamp;

/// Answers any call with a fixed acknowledgment plus the current time.
/// Parameters are ignored.
pub struct PingMethod;

#[async_trait]
impl RpcMethod for PingMethod {
    fn name(&self) -> &str {
        "ping"
    }

    async fn execute(
        &self,
        _ctx: &MethodContext,
        _params: Option<Value>,
    ) -> Result<Value, MethodError> {
        Ok(json!({
            "pong": true,
            "time": unix_timestamp(),
            "message": "pong",
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ping_acknowledges() {
        let ctx = MethodContext::new("ping", "1");
        let result = PingMethod.execute(&ctx, None).await.expect("execute");
        assert_eq!(result["pong"], json!(true));
        assert_eq!(result["message"], json!("pong"));
        assert!(result["time"].as_u64().is_some());
    }

    #[tokio::test]
    async fn ping_ignores_params() {
        let ctx = MethodContext::new("ping", "1");
        let result = PingMethod
            .execute(&ctx, Some(json!({"anything": [1, 2, 3]})))
            .await
            .expect("execute");
        assert_eq!(result["pong"], json!(true));
    }

    #[test]
    fn ping_is_public() {
        assert_eq!(PingMethod.name(), "ping");
        assert!(!PingMethod.requires_auth());
    }
}
