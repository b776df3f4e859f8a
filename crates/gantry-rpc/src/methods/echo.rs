//! Parameter echo method.

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use crate::error::MethodError;
use crate::method::{MethodContext, RpcMethod};

use super::unix_timestamp;

/// Returns the caller's params back under `echo`, plus the current time.
///
/// Params must decode to a JSON object; an absent `params` member echoes
/// an empty one.
pub struct EchoMethod;

#[async_trait]
impl RpcMethod for EchoMethod {
    fn name(&self) -> &str {
        "echo"
    }

    async fn execute(
        &self,
        _ctx: &MethodContext,
        params: Option<Value>,
    ) -> Result<Value, MethodError> {
        let input: Map<String, Value> = match params {
            Some(params) => serde_json::from_value(params)
                .map_err(|err| MethodError::new(format!("invalid params: {err}")))?,
            None => Map::new(),
        };
        Ok(json!({
            "echo": input,
            "time": unix_timestamp(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn echo_returns_params_unchanged() {
        let ctx = MethodContext::new("echo", "1");
        let result = EchoMethod
            .execute(&ctx, Some(json!({"a": 1, "b": "x"})))
            .await
            .expect("execute");
        assert_eq!(result["echo"], json!({"a": 1, "b": "x"}));
        assert!(result["time"].as_u64().is_some());
    }

    #[tokio::test]
    async fn echo_without_params_returns_empty_object() {
        let ctx = MethodContext::new("echo", "1");
        let result = EchoMethod.execute(&ctx, None).await.expect("execute");
        assert_eq!(result["echo"], json!({}));
    }

    #[tokio::test]
    async fn echo_rejects_non_object_params() {
        let ctx = MethodContext::new("echo", "1");
        let err = EchoMethod
            .execute(&ctx, Some(json!([1, 2])))
            .await
            .expect_err("array params");
        assert!(err.message().starts_with("invalid params:"));
    }
}
