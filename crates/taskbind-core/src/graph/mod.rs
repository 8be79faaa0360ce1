pub mod group;
pub mod in_memory;

pub use group::TaskGroup;
pub use in_memory::InMemoryDag;

use std::sync::Arc;

use crate::models::{CoreResult, TaskId};
use crate::operators::Operator;

/// Directed graph that owns constructed operators.
///
/// Implementations must accept concurrent `register` calls.
pub trait ExecutionGraph: Send + Sync {
    fn dag_id(&self) -> &str;

    fn contains(&self, task_id: &TaskId) -> CoreResult<bool>;

    fn register(&self, operator: Arc<dyn Operator>, group: Option<&TaskGroup>) -> CoreResult<()>;
}
