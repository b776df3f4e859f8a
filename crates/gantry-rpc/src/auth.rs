//! Authorization seam consulted for methods that require auth.

use crate::method::MethodContext;

/// Decides whether a call may proceed to a method whose
/// [`requires_auth`](crate::RpcMethod::requires_auth) returns `true`.
///
/// A denial carries a caller-facing reason that ends up in the error
/// response message.
pub trait AuthPolicy: Send + Sync {
    fn authorize(&self, ctx: &MethodContext) -> Result<(), String>;
}

/// The default policy: every call is allowed.
///
/// The base scaffold ships no credential layer, so auth-requiring
/// methods are served like any other until a deployment installs a
/// real policy on the dispatcher.
pub struct Permissive;

impl AuthPolicy for Permissive {
    fn authorize(&self, _ctx: &MethodContext) -> Result<(), String> {
        Ok(())
    }
}
