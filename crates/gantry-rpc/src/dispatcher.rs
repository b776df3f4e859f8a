//! Request dispatch: raw bytes in, exactly one response out.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use gantry_protocol::{RpcErrorResponse, RpcRequest, RpcResponse, PROTOCOL_VERSION};

use crate::auth::{AuthPolicy, Permissive};
use crate::error::DispatchError;
use crate::method::MethodContext;
use crate::registry::MethodRegistry;

/// The single response produced for every handled request.
///
/// Serializes as either a success or an error envelope; the two are
/// mutually exclusive by construction.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RpcOutcome {
    Success(RpcResponse),
    Error(RpcErrorResponse),
}

impl RpcOutcome {
    /// Wraps a method result in a success envelope.
    pub fn success(id: impl Into<String>, result: Value) -> Self {
        RpcOutcome::Success(RpcResponse::success(id, result))
    }

    /// Folds a dispatch failure into an error envelope.
    pub fn failure(id: impl Into<String>, error: DispatchError) -> Self {
        let (message, data) = match error {
            DispatchError::Method(err) => err.into_parts(),
            other => (other.to_string(), None),
        };
        let mut response = RpcErrorResponse::error(id, message);
        response.error.data = data;
        RpcOutcome::Error(response)
    }

    /// The correlation id this outcome will be delivered under.
    pub fn id(&self) -> &str {
        match self {
            RpcOutcome::Success(response) => &response.id,
            RpcOutcome::Error(response) => &response.id,
        }
    }

    /// Whether this is a success envelope.
    pub fn is_success(&self) -> bool {
        matches!(self, RpcOutcome::Success(_))
    }
}

/// Routes decoded requests to registered methods.
///
/// Infallible from the transport's point of view: every call produces
/// an [`RpcOutcome`], and protocol violations are reported inside the
/// envelope rather than as transport errors. Holds the registry behind
/// an `Arc`, so methods can keep being registered while the dispatcher
/// serves.
pub struct Dispatcher {
    registry: Arc<MethodRegistry>,
    auth: Arc<dyn AuthPolicy>,
}

impl Dispatcher {
    /// Creates a dispatcher with the default [`Permissive`] auth policy.
    pub fn new(registry: Arc<MethodRegistry>) -> Self {
        Self::with_auth_policy(registry, Arc::new(Permissive))
    }

    /// Creates a dispatcher with an explicit auth policy.
    pub fn with_auth_policy(registry: Arc<MethodRegistry>, auth: Arc<dyn AuthPolicy>) -> Self {
        Self { registry, auth }
    }

    /// Handles one raw request body.
    ///
    /// Decoding happens in two stages so a malformed request can still
    /// echo its id: first to a JSON value, salvaging a string `id` when
    /// one is present, then to the typed envelope.
    pub async fn handle(&self, body: &[u8], deadline: Option<Instant>) -> RpcOutcome {
        let value: Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(err) => {
                return RpcOutcome::failure("", DispatchError::MalformedRequest(err.to_string()));
            }
        };
        let salvaged_id = value
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let request: RpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(err) => {
                return RpcOutcome::failure(
                    salvaged_id,
                    DispatchError::MalformedRequest(err.to_string()),
                );
            }
        };
        self.dispatch(request, deadline).await
    }

    /// Dispatches a decoded request: version gate, method lookup, auth
    /// check where required, then execution.
    pub async fn dispatch(&self, request: RpcRequest, deadline: Option<Instant>) -> RpcOutcome {
        let RpcRequest {
            jsonrpc,
            method,
            params,
            id,
        } = request;
        debug!(method = %method, id = %id, "dispatching rpc request");

        if jsonrpc != PROTOCOL_VERSION {
            return RpcOutcome::failure(id, DispatchError::UnsupportedVersion(jsonrpc));
        }
        let Some(handler) = self.registry.lookup(&method) else {
            return RpcOutcome::failure(id, DispatchError::MethodNotFound(method));
        };

        let mut ctx = MethodContext::new(&method, &id);
        if let Some(deadline) = deadline {
            ctx = ctx.with_deadline(deadline);
        }

        if handler.requires_auth() {
            if let Err(reason) = self.auth.authorize(&ctx) {
                return RpcOutcome::failure(id, DispatchError::Unauthorized { method, reason });
            }
        }

        match handler.execute(&ctx, params).await {
            Ok(result) => RpcOutcome::success(id, result),
            Err(err) => RpcOutcome::failure(id, DispatchError::Method(err)),
        }
    }
}
