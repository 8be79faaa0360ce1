use std::sync::Arc;

use crate::graph::{ExecutionGraph, TaskGroup};
use crate::models::{CoreError, CoreErrorKind, CoreResult, Task};
use crate::operators::Operator;
use crate::resolution::TaskResolver;

/// Resolves every task on the blocking pool and returns results in input order.
///
/// Tasks do not depend on each other; one failure does not stop the rest.
pub async fn resolve_concurrently(
    resolver: Arc<TaskResolver>,
    tasks: Vec<Task>,
    graph: Arc<dyn ExecutionGraph>,
    group: Option<TaskGroup>,
) -> Vec<CoreResult<Arc<dyn Operator>>> {
    let mut pending = Vec::with_capacity(tasks.len());
    for task in tasks {
        let task_id = task.id.clone();
        let operator_class = task.operator_class.clone();
        let resolver = resolver.clone();
        let graph = graph.clone();
        let group = group.clone();

        let handle = tokio::task::spawn_blocking(move || {
            resolver.resolve(&task, graph.as_ref(), group.as_ref())
        });
        pending.push((task_id, operator_class, handle));
    }

    let mut results = Vec::with_capacity(pending.len());
    for (task_id, operator_class, handle) in pending {
        let result = match handle.await {
            Ok(result) => result,
            Err(join_error) => {
                tracing::error!(
                    task_id = %task_id,
                    operator_class = %operator_class,
                    error = %join_error,
                    "task resolution did not complete"
                );
                Err(CoreError {
                    task: Some(task_id),
                    operator_class: Some(operator_class),
                    kind: CoreErrorKind::Internal,
                    message: format!("task resolution join failure: {join_error}"),
                })
            }
        };
        results.push(result);
    }
    results
}
