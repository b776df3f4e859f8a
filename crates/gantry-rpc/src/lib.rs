//! # gantry-rpc
//!
//! Method registry and request dispatcher for gantry services.
//! Application code implements [`RpcMethod`], registers it in a
//! [`MethodRegistry`], and hands the registry to a [`Dispatcher`];
//! transports feed raw request bytes in and write the resulting
//! [`RpcOutcome`] back out.

pub mod auth;
pub mod dispatcher;
pub mod error;
pub mod method;
pub mod methods;
pub mod registry;

pub use auth::{AuthPolicy, Permissive};
pub use dispatcher::{Dispatcher, RpcOutcome};
pub use error::{DispatchError, MethodError};
pub use method::{MethodContext, RpcMethod};
pub use registry::MethodRegistry;
