pub mod namespace;

pub use namespace::{Namespace, OperatorEntry, Symbol};

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::models::{CoreError, CoreErrorKind, CoreResult};
use crate::operators::{EmptyOperator, GenericOperator};

pub const BUILTIN_NAMESPACE: &str = "taskbind.operators";

/// Source of namespaces for name resolution.
pub trait NamespaceLoader: Send + Sync {
    fn load(&self, path: &str) -> Option<Arc<Namespace>>;
}

type NamespaceBuilder = Box<dyn Fn(Namespace) -> Namespace + Send + Sync>;

struct NamespaceSlot {
    build: NamespaceBuilder,
    loaded: OnceLock<Arc<Namespace>>,
}

/// Registration table mapping namespace paths to lazily built namespaces.
///
/// Populated at process start; each namespace is built at most once, on its
/// first load, even when several threads load it at the same time.
#[derive(Default)]
pub struct OperatorRegistry {
    namespaces: HashMap<String, NamespaceSlot>,
}

impl OperatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtin_operators() -> Self {
        let mut registry = Self::new();
        registry.namespaces.insert(
            BUILTIN_NAMESPACE.to_string(),
            NamespaceSlot {
                build: Box::new(builtin_namespace),
                loaded: OnceLock::new(),
            },
        );
        registry
    }

    pub fn register_namespace<F>(&mut self, path: impl Into<String>, build: F) -> CoreResult<()>
    where
        F: Fn(Namespace) -> Namespace + Send + Sync + 'static,
    {
        let path = path.into();
        if path.is_empty() {
            return Err(CoreError::new(
                CoreErrorKind::InvalidInput,
                "namespace path must not be empty",
            ));
        }
        if self.namespaces.contains_key(&path) {
            return Err(CoreError::new(
                CoreErrorKind::DuplicateRegistration,
                format!("namespace '{path}' is already registered"),
            ));
        }

        self.namespaces.insert(
            path,
            NamespaceSlot {
                build: Box::new(build),
                loaded: OnceLock::new(),
            },
        );
        Ok(())
    }

    /// Registers an already built namespace under its own path.
    pub fn insert_namespace(&mut self, namespace: Namespace) -> CoreResult<()> {
        let path = namespace.path().to_string();
        self.register_namespace(path, move |_| namespace.clone())
    }

    pub fn namespace_paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.namespaces.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    pub fn is_loaded(&self, path: &str) -> bool {
        self.namespaces
            .get(path)
            .is_some_and(|slot| slot.loaded.get().is_some())
    }
}

impl NamespaceLoader for OperatorRegistry {
    fn load(&self, path: &str) -> Option<Arc<Namespace>> {
        let slot = self.namespaces.get(path)?;
        let namespace = slot.loaded.get_or_init(|| {
            let namespace = (slot.build)(Namespace::new(path));
            tracing::debug!(
                namespace = path,
                symbols = namespace.len(),
                "loaded operator namespace"
            );
            Arc::new(namespace)
        });
        Some(namespace.clone())
    }
}

fn builtin_namespace(namespace: Namespace) -> Namespace {
    namespace
        .with_operator(EmptyOperator::descriptor(), EmptyOperator::factory())
        .with_operator(GenericOperator::descriptor(), GenericOperator::factory())
        .with_helper("TriggerRule", "trigger rule names for operator dependencies")
}
