pub mod binder;
pub mod concurrent;
pub mod merge;
pub mod name;

pub use binder::{BindRequest, IDENTITY_PARAMETERS, bind, operator_entry};
pub use concurrent::resolve_concurrently;
pub use merge::{
    ConfigLayer, ConfigSource, MergedConfig, MergedEntry, config_layers, merge_layers,
    merge_task_config,
};
pub use name::{OperatorClass, ResolvedSymbol, parse_operator_class, resolve_symbol};

use std::sync::Arc;

use crate::config::ResolverConfig;
use crate::graph::{ExecutionGraph, TaskGroup};
use crate::models::{CoreResult, Task};
use crate::operators::Operator;
use crate::registry::NamespaceLoader;

/// Turns tasks into operators registered in an execution graph.
///
/// Each call resolves the operator class, merges the task's configuration
/// and binds one operator. The resolver keeps no per-task state, so a single
/// instance can be shared across threads.
#[derive(Clone)]
pub struct TaskResolver {
    loader: Arc<dyn NamespaceLoader>,
    config: ResolverConfig,
}

impl TaskResolver {
    pub fn new(loader: Arc<dyn NamespaceLoader>) -> Self {
        Self::with_config(loader, ResolverConfig::default())
    }

    pub fn with_config(loader: Arc<dyn NamespaceLoader>, config: ResolverConfig) -> Self {
        Self { loader, config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn resolve(
        &self,
        task: &Task,
        graph: &dyn ExecutionGraph,
        group: Option<&TaskGroup>,
    ) -> CoreResult<Arc<dyn Operator>> {
        tracing::debug!(
            task_id = %task.id,
            operator_class = %task.operator_class,
            dag_id = graph.dag_id(),
            "resolving task"
        );

        self.resolve_unattributed(task, graph, group)
            .map_err(|error| error.attributed(&task.id, &task.operator_class))
    }

    /// Resolves tasks in order, stopping at the first failure.
    ///
    /// Operators bound before the failing task stay registered.
    pub fn resolve_all(
        &self,
        tasks: &[Task],
        graph: &dyn ExecutionGraph,
        group: Option<&TaskGroup>,
    ) -> CoreResult<Vec<Arc<dyn Operator>>> {
        tasks
            .iter()
            .map(|task| self.resolve(task, graph, group))
            .collect()
    }

    /// The configuration a task would be constructed with, without binding it.
    pub fn merged_config(&self, task: &Task) -> CoreResult<MergedConfig> {
        let resolved = resolve_symbol(self.loader.as_ref(), &task.operator_class)
            .map_err(|error| error.attributed(&task.id, &task.operator_class))?;
        let entry = operator_entry(&resolved, &task.operator_class)
            .map_err(|error| error.attributed(&task.id, &task.operator_class))?;
        Ok(merge_task_config(task, &entry.descriptor))
    }

    fn resolve_unattributed(
        &self,
        task: &Task,
        graph: &dyn ExecutionGraph,
        group: Option<&TaskGroup>,
    ) -> CoreResult<Arc<dyn Operator>> {
        let resolved = resolve_symbol(self.loader.as_ref(), &task.operator_class)?;
        let entry = operator_entry(&resolved, &task.operator_class)?;
        let config = merge_task_config(task, &entry.descriptor);

        bind(BindRequest {
            task_id: &task.id,
            operator_class: &task.operator_class,
            entry,
            config,
            graph,
            group,
            validation: self.config.parameter_validation,
        })
    }
}
