//! The method abstraction: the unit of behavior a gantry server exposes.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::MethodError;

/// A callable RPC method.
///
/// Implementations are registered under [`RpcMethod::name`] and invoked
/// by the dispatcher with the request's raw params. Handlers run on the
/// async runtime and may be called concurrently, so implementations
/// must be `Send + Sync` and keep any mutable state behind their own
/// synchronization.
#[async_trait]
pub trait RpcMethod: Send + Sync {
    /// Unique name the method is registered and looked up under.
    fn name(&self) -> &str;

    /// Executes the method.
    ///
    /// `params` is the request's `params` member, uninterpreted; absent
    /// and `null` both arrive as `None`. The returned value becomes the
    /// response `result`; an error becomes the response `error` with
    /// the message passed through verbatim.
    async fn execute(
        &self,
        ctx: &MethodContext,
        params: Option<Value>,
    ) -> Result<Value, MethodError>;

    /// Whether the method expects an authenticated caller.
    ///
    /// The dispatcher consults its [`AuthPolicy`](crate::AuthPolicy)
    /// only for methods that return `true` here. Defaults to `false`.
    fn requires_auth(&self) -> bool {
        false
    }
}

/// Per-call execution context handed to every method.
///
/// Carries the call's identity and an optional deadline propagated from
/// the transport. Methods doing slow work can poll [`expired`] or size
/// their own timeouts from [`remaining`].
///
/// [`expired`]: MethodContext::expired
/// [`remaining`]: MethodContext::remaining
#[derive(Debug, Clone)]
pub struct MethodContext {
    method: String,
    request_id: String,
    deadline: Option<Instant>,
}

impl MethodContext {
    /// Creates a context for one call, without a deadline.
    pub fn new(method: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            request_id: request_id.into(),
            deadline: None,
        }
    }

    /// Attaches a deadline after which the call should give up.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Name of the method being invoked.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Correlation id of the request being served.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// The deadline, if the transport set one.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline. `None` when no deadline is set;
    /// zero once the deadline has passed.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    /// Whether the deadline has passed.
    pub fn expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_exposes_call_identity() {
        let ctx = MethodContext::new("echo", "req-1");
        assert_eq!(ctx.method(), "echo");
        assert_eq!(ctx.request_id(), "req-1");
        assert!(ctx.deadline().is_none());
        assert!(ctx.remaining().is_none());
        assert!(!ctx.expired());
    }

    #[test]
    fn past_deadline_reports_expired() {
        let ctx = MethodContext::new("echo", "req-1")
            .with_deadline(Instant::now() - Duration::from_secs(1));
        assert!(ctx.expired());
        assert_eq!(ctx.remaining(), Some(Duration::ZERO));
    }

    #[test]
    fn future_deadline_reports_remaining_time() {
        let ctx = MethodContext::new("echo", "req-1")
            .with_deadline(Instant::now() + Duration::from_secs(60));
        assert!(!ctx.expired());
        let remaining = ctx.remaining().expect("deadline set");
        assert!(remaining > Duration::from_secs(50));
    }
}
