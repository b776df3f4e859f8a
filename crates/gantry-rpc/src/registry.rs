//! Named method registry shared between registration and dispatch.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::method::RpcMethod;

/// A concurrent map from method name to handler.
///
/// Reads vastly outnumber writes once a server is up, so the map sits
/// behind an [`RwLock`]: lookups take the shared lock, registrations
/// the exclusive one. Handlers are stored as `Arc<dyn RpcMethod>` and
/// cloned out on lookup, so a replaced method stays valid for calls
/// already in flight.
pub struct MethodRegistry {
    methods: RwLock<HashMap<String, Arc<dyn RpcMethod>>>,
}

impl MethodRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            methods: RwLock::new(HashMap::new()),
        }
    }

    /// Registers `method` under its own name. Registering a second
    /// handler under the same name replaces the first.
    pub fn register(&self, method: Arc<dyn RpcMethod>) {
        let name = method.name().to_string();
        tracing::debug!(method = %name, "registering rpc method");
        self.methods
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name, method);
    }

    /// Looks up a handler by name.
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn RpcMethod>> {
        self.methods
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Whether a handler is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.methods
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Names of all registered methods, sorted for stable output.
    pub fn method_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .methods
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }
}

impl Default for MethodRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MethodError;
    use crate::method::MethodContext;
    use async_trait::async_trait;
    use serde_json::{json, Value};

    struct Named(&'static str, i64);

    #[async_trait]
    impl RpcMethod for Named {
        fn name(&self) -> &str {
            self.0
        }

        async fn execute(
            &self,
            _ctx: &MethodContext,
            _params: Option<Value>,
        ) -> Result<Value, MethodError> {
            Ok(json!(self.1))
        }
    }

    #[test]
    fn register_then_lookup_returns_handler() {
        let registry = MethodRegistry::new();
        registry.register(Arc::new(Named("ping", 1)));
        let found = registry.lookup("ping").expect("registered");
        assert_eq!(found.name(), "ping");
        assert!(registry.contains("ping"));
    }

    #[test]
    fn lookup_of_unknown_name_returns_none() {
        let registry = MethodRegistry::new();
        assert!(registry.lookup("missing").is_none());
        assert!(!registry.contains("missing"));
    }

    #[tokio::test]
    async fn reregistration_replaces_previous_handler() {
        let registry = MethodRegistry::new();
        registry.register(Arc::new(Named("version", 1)));
        registry.register(Arc::new(Named("version", 2)));

        let handler = registry.lookup("version").expect("registered");
        let ctx = MethodContext::new("version", "1");
        let result = handler.execute(&ctx, None).await.expect("execute");
        assert_eq!(result, json!(2));
    }

    #[test]
    fn method_names_are_sorted() {
        let registry = MethodRegistry::new();
        registry.register(Arc::new(Named("echo", 1)));
        registry.register(Arc::new(Named("ping", 2)));
        registry.register(Arc::new(Named("admin.reset", 3)));
        assert_eq!(registry.method_names(), vec!["admin.reset", "echo", "ping"]);
    }
}
