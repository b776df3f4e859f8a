//! JSON-RPC 2.0 message types for the gantry wire protocol.
//!
//! Gantry speaks a deliberately narrow subset of JSON-RPC 2.0: single
//! calls only (no batches, no notifications), string correlation ids,
//! and a single application error code. Requests decode leniently so
//! that missing fields surface as protocol errors with an echoed id
//! rather than as decode failures.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The only protocol version gantry accepts.
pub const PROTOCOL_VERSION: &str = "2.0";

/// A single JSON-RPC request envelope.
///
/// Every field defaults when absent, so `{"method":"ping"}` decodes to
/// an (invalid) request with empty version and id instead of failing.
/// Type mismatches (a numeric id, a non-string method) still fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Protocol version; must be [`PROTOCOL_VERSION`] to be served.
    #[serde(default)]
    pub jsonrpc: String,
    /// Name of the method to invoke.
    #[serde(default)]
    pub method: String,
    /// Method parameters, passed through to the handler uninterpreted.
    /// Absent and `null` are equivalent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    /// Caller-chosen correlation id, echoed back verbatim.
    #[serde(default)]
    pub id: String,
}

impl RpcRequest {
    /// Creates a request for `method` with the current protocol version.
    pub fn new(method: impl Into<String>, params: Option<Value>, id: impl Into<String>) -> Self {
        Self {
            jsonrpc: PROTOCOL_VERSION.to_string(),
            method: method.into(),
            params,
            id: id.into(),
        }
    }
}

/// A successful JSON-RPC response. Carries `result` and never `error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    /// Protocol version, always [`PROTOCOL_VERSION`].
    pub jsonrpc: String,
    /// Value produced by the method.
    pub result: Value,
    /// Correlation id echoed from the request.
    pub id: String,
}

impl RpcResponse {
    /// Creates a success response echoing `id`.
    pub fn success(id: impl Into<String>, result: Value) -> Self {
        Self {
            jsonrpc: PROTOCOL_VERSION.to_string(),
            result,
            id: id.into(),
        }
    }
}

/// A failed JSON-RPC response. Carries `error` and never `result`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcErrorResponse {
    /// Protocol version, always [`PROTOCOL_VERSION`].
    pub jsonrpc: String,
    /// What went wrong.
    pub error: RpcErrorInfo,
    /// Correlation id echoed from the request, or empty when none could
    /// be recovered from the body.
    pub id: String,
}

impl RpcErrorResponse {
    /// Creates an error response with the fixed gantry error code.
    pub fn error(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: PROTOCOL_VERSION.to_string(),
            error: RpcErrorInfo {
                code: error_codes::RPC_ERROR,
                message: message.into(),
                data: None,
            },
            id: id.into(),
        }
    }
}

/// The error member of a failed response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcErrorInfo {
    /// Always [`error_codes::RPC_ERROR`] on the gantry wire.
    pub code: i32,
    /// Human-readable description of the failure.
    pub message: String,
    /// Optional method-supplied detail, omitted from the wire when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// JSON-RPC error codes used on the gantry wire.
pub mod error_codes {
    /// The single application error code. Failures are distinguished by
    /// message text, not by code.
    pub const RPC_ERROR: i32 = -32000;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_new_sets_protocol_version() {
        let req = RpcRequest::new("ping", None, "1");
        assert_eq!(req.jsonrpc, "2.0");
        assert_eq!(req.method, "ping");
        assert_eq!(req.id, "1");
        assert!(req.params.is_none());
    }

    #[test]
    fn response_success_echoes_id() {
        let resp = RpcResponse::success("42", json!({"ok": true}));
        assert_eq!(resp.jsonrpc, "2.0");
        assert_eq!(resp.id, "42");
        assert_eq!(resp.result["ok"], json!(true));
    }

    #[test]
    fn error_response_uses_fixed_code() {
        let resp = RpcErrorResponse::error("7", "method not found: nope");
        assert_eq!(resp.error.code, error_codes::RPC_ERROR);
        assert_eq!(resp.error.message, "method not found: nope");
        assert!(resp.error.data.is_none());
    }
}
