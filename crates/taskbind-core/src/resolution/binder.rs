use std::sync::Arc;

use crate::config::ParameterValidation;
use crate::graph::{ExecutionGraph, TaskGroup};
use crate::EXTRA_CONTEXT_KEY;
use crate::models::{CoreError, CoreErrorKind, CoreResult, OperatorDescriptor, TaskId};
use crate::operators::{Operator, OperatorArgs};
use crate::registry::{OperatorEntry, Symbol};
use crate::resolution::{MergedConfig, ResolvedSymbol};

/// Parameters bound from the task and graph, never from merged configuration.
pub const IDENTITY_PARAMETERS: &[&str] = &["task_id", "dag", "task_group"];

pub struct BindRequest<'a> {
    pub task_id: &'a TaskId,
    pub operator_class: &'a str,
    pub entry: &'a OperatorEntry,
    pub config: MergedConfig,
    pub graph: &'a dyn ExecutionGraph,
    pub group: Option<&'a TaskGroup>,
    pub validation: ParameterValidation,
}

/// Rejects symbols that are not operators.
pub fn operator_entry<'a>(
    resolved: &'a ResolvedSymbol,
    operator_class: &str,
) -> CoreResult<&'a OperatorEntry> {
    match &resolved.symbol {
        Symbol::Operator(entry) => Ok(entry),
        Symbol::Helper { description } => Err(CoreError {
            task: None,
            operator_class: Some(operator_class.to_string()),
            kind: CoreErrorKind::TypeConformance,
            message: format!(
                "operator class {operator_class} names a helper ({description}), not an operator"
            ),
        }),
    }
}

/// Constructs the operator and registers it into the graph.
///
/// Nothing is registered unless construction and every check succeed.
pub fn bind(request: BindRequest<'_>) -> CoreResult<Arc<dyn Operator>> {
    let BindRequest {
        task_id,
        operator_class,
        entry,
        config,
        graph,
        group,
        validation,
    } = request;

    validate_parameters(&entry.descriptor, &config, validation, operator_class)?;

    let effective_id = match group {
        Some(group) => group.child_id(task_id),
        None => task_id.clone(),
    };

    if graph.contains(&effective_id)? {
        return Err(CoreError {
            task: None,
            operator_class: Some(operator_class.to_string()),
            kind: CoreErrorKind::DuplicateTask,
            message: format!(
                "task '{effective_id}' is already registered in dag '{}'",
                graph.dag_id()
            ),
        });
    }

    let operator: Arc<dyn Operator> = Arc::from((entry.factory)(OperatorArgs {
        task_id: effective_id.clone(),
        operator_class,
        dag_id: graph.dag_id(),
        task_group: group,
        params: config.into_params(),
    })?);

    if operator.task_id() != &effective_id || operator.operator_class() != operator_class {
        return Err(CoreError {
            task: None,
            operator_class: Some(operator_class.to_string()),
            kind: CoreErrorKind::TypeConformance,
            message: format!(
                "operator class {operator_class} constructed '{}' for task '{}' \
                 instead of a conforming operator",
                operator.operator_class(),
                operator.task_id()
            ),
        });
    }

    graph.register(operator.clone(), group)?;

    tracing::debug!(
        task_id = %effective_id,
        operator_class,
        dag_id = graph.dag_id(),
        task_group = group.map(TaskGroup::group_id),
        "registered operator"
    );

    Ok(operator)
}

/// Identity parameters are rejected under any surface and validation mode.
/// An operator that accepts `extra_context` takes the key whatever its surface lists.
fn validate_parameters(
    descriptor: &OperatorDescriptor,
    config: &MergedConfig,
    validation: ParameterValidation,
    operator_class: &str,
) -> CoreResult<()> {
    let reserved: Vec<&str> = config
        .keys()
        .filter(|key| IDENTITY_PARAMETERS.contains(key))
        .collect();
    if !reserved.is_empty() {
        return Err(CoreError {
            task: None,
            operator_class: Some(operator_class.to_string()),
            kind: CoreErrorKind::InvalidInput,
            message: format!(
                "operator class {operator_class} binds {} from the task, not from configuration",
                reserved.join(", ")
            ),
        });
    }

    let unknown = descriptor.parameters.unknown_keys(
        config
            .keys()
            .filter(|key| !(descriptor.accepts_extra_context && *key == EXTRA_CONTEXT_KEY)),
    );
    if unknown.is_empty() {
        return Ok(());
    }

    match validation {
        ParameterValidation::Strict => Err(CoreError {
            task: None,
            operator_class: Some(operator_class.to_string()),
            kind: CoreErrorKind::UnknownParameter,
            message: format!(
                "operator class {operator_class} does not accept parameters: {}",
                unknown.join(", ")
            ),
        }),
        ParameterValidation::Permissive => {
            tracing::warn!(
                operator_class,
                unknown = %unknown.join(", "),
                "forwarding parameters outside the operator's parameter surface"
            );
            Ok(())
        }
    }
}
