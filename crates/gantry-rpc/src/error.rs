//! Error types for method execution and request dispatch.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// A failure reported by a method implementation.
///
/// The message is what the caller sees in the response `error.message`,
/// so implementations should phrase it for the client, not for server
/// logs. Optional structured detail rides along in `data`.
#[derive(Debug, Clone)]
pub struct MethodError {
    message: String,
    data: Option<Value>,
}

impl MethodError {
    /// Creates a method error with a caller-facing message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }

    /// Attaches structured detail for the response `error.data` member.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// The caller-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Structured detail, if any.
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Splits the error into its response parts.
    pub fn into_parts(self) -> (String, Option<Value>) {
        (self.message, self.data)
    }
}

impl fmt::Display for MethodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for MethodError {}

/// Everything that can go wrong between raw request bytes and a method
/// returning.
///
/// Dispatch never surfaces these as a transport failure; the dispatcher
/// folds each variant into an error response whose message is the
/// `Display` text below.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The body was not a decodable request envelope.
    #[error("invalid request: {0}")]
    MalformedRequest(String),

    /// The request named a protocol version other than "2.0".
    #[error("unsupported jsonrpc version: {0}")]
    UnsupportedVersion(String),

    /// No method is registered under the requested name.
    #[error("method not found: {0}")]
    MethodNotFound(String),

    /// The auth policy refused a method that requires authentication.
    #[error("unauthorized call to {method}: {reason}")]
    Unauthorized { method: String, reason: String },

    /// The method ran and reported a failure.
    #[error(transparent)]
    Method(#[from] MethodError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn method_error_displays_message_only() {
        let err = MethodError::new("invalid params: trailing comma");
        assert_eq!(err.to_string(), "invalid params: trailing comma");
    }

    #[test]
    fn method_error_carries_data() {
        let err = MethodError::new("rejected").with_data(json!({"field": "name"}));
        let (message, data) = err.into_parts();
        assert_eq!(message, "rejected");
        assert_eq!(data, Some(json!({"field": "name"})));
    }

    #[test]
    fn dispatch_error_messages_match_wire_contract() {
        assert_eq!(
            DispatchError::MalformedRequest("eof".into()).to_string(),
            "invalid request: eof"
        );
        assert_eq!(
            DispatchError::UnsupportedVersion("1.0".into()).to_string(),
            "unsupported jsonrpc version: 1.0"
        );
        assert_eq!(
            DispatchError::MethodNotFound("nope".into()).to_string(),
            "method not found: nope"
        );
        assert_eq!(
            DispatchError::Unauthorized {
                method: "admin.reset".into(),
                reason: "no credentials".into(),
            }
            .to_string(),
            "unauthorized call to admin.reset: no credentials"
        );
    }

    #[test]
    fn dispatch_error_is_transparent_over_method_error() {
        let err = DispatchError::from(MethodError::new("boom"));
        assert_eq!(err.to_string(), "boom");
    }
}
