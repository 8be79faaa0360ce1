pub mod config;
pub mod graph;
pub mod logging;
pub mod models;
pub mod operators;
pub mod registry;
pub mod resolution;

/// Merged-configuration key carrying a task's owner.
pub const OWNER_KEY: &str = "owner";
/// Reserved merged-configuration key carrying a task's extra context.
pub const EXTRA_CONTEXT_KEY: &str = "extra_context";

pub use config::{ParameterValidation, ResolverConfig};
pub use graph::{ExecutionGraph, InMemoryDag, TaskGroup};
pub use models::{CoreError, CoreErrorKind, CoreResult, Task, TaskId};
pub use operators::Operator;
pub use registry::{NamespaceLoader, OperatorRegistry};
pub use resolution::{TaskResolver, resolve_concurrently};
