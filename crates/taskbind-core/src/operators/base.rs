use serde_json::Value;

use crate::models::{CoreError, CoreErrorKind, CoreResult, TaskId};
use crate::operators::{OperatorArgs, OperatorParams};

/// Keyword parameters shared by every operator constructor.
pub const BASE_OPERATOR_PARAMETERS: &[&str] = &[
    "owner",
    "email",
    "email_on_retry",
    "email_on_failure",
    "retries",
    "retry_delay",
    "retry_exponential_backoff",
    "max_retry_delay",
    "start_date",
    "end_date",
    "depends_on_past",
    "wait_for_downstream",
    "params",
    "priority_weight",
    "weight_rule",
    "queue",
    "pool",
    "pool_slots",
    "sla",
    "execution_timeout",
    "trigger_rule",
    "max_active_tis_per_dag",
    "executor_config",
    "do_xcom_push",
    "doc_md",
    "doc",
    "doc_json",
    "doc_yaml",
    "doc_rst",
    "task_display_name",
    "run_as_user",
    "resources",
    "max_active_tis_per_dagrun",
    "inlets",
    "outlets",
    "multiple_outputs",
    "map_index_template",
    "on_execute_callback",
    "on_failure_callback",
    "on_success_callback",
    "on_retry_callback",
    "on_skipped_callback",
    "pre_execute",
    "post_execute",
    "allow_nested_operators",
];

/// Fields common to all operators, read from the merged parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct BaseOperator {
    pub task_id: TaskId,
    pub operator_class: String,
    pub dag_id: String,
    pub task_group_id: Option<String>,
    pub owner: Option<String>,
    pub retries: u32,
    pub params: OperatorParams,
}

impl BaseOperator {
    pub fn from_args(args: OperatorArgs<'_>) -> CoreResult<Self> {
        let owner = match args.params.get("owner") {
            None => None,
            Some(Value::String(owner)) => Some(owner.clone()),
            Some(other) => {
                return Err(invalid_parameter(
                    &args,
                    format!("'owner' must be a string, got {other}"),
                ));
            }
        };

        let retries = match args.params.get("retries") {
            None => 0,
            Some(value) => value
                .as_u64()
                .and_then(|retries| u32::try_from(retries).ok())
                .ok_or_else(|| {
                    invalid_parameter(
                        &args,
                        format!("'retries' must be a non-negative integer, got {value}"),
                    )
                })?,
        };

        Ok(Self {
            task_group_id: args.task_group.map(|group| group.group_id().to_string()),
            operator_class: args.operator_class.to_string(),
            dag_id: args.dag_id.to_string(),
            task_id: args.task_id,
            owner,
            retries,
            params: args.params,
        })
    }
}

fn invalid_parameter(args: &OperatorArgs<'_>, message: String) -> CoreError {
    CoreError {
        task: None,
        operator_class: Some(args.operator_class.to_string()),
        kind: CoreErrorKind::InvalidInput,
        message,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Map, json};

    use super::{BASE_OPERATOR_PARAMETERS, BaseOperator};
    use crate::graph::TaskGroup;
    use crate::models::{CoreErrorKind, TaskId};
    use crate::operators::OperatorArgs;

    fn args<'a>(params: serde_json::Value) -> OperatorArgs<'a> {
        let params = match params {
            serde_json::Value::Object(map) => map,
            _ => Map::new(),
        };
        OperatorArgs {
            task_id: TaskId::from("t1"),
            operator_class: "pkg.mod.Op",
            dag_id: "dag",
            task_group: None,
            params,
        }
    }

    #[test]
    fn base_parameters_cover_lineage_and_display_keywords() {
        for keyword in [
            "inlets",
            "outlets",
            "run_as_user",
            "max_active_tis_per_dagrun",
            "resources",
            "task_display_name",
        ] {
            assert!(BASE_OPERATOR_PARAMETERS.contains(&keyword), "{keyword}");
        }
    }

    #[test]
    fn reads_owner_and_retries() {
        let base = BaseOperator::from_args(args(json!({"owner": "bob", "retries": 5}))).unwrap();
        assert_eq!(base.owner.as_deref(), Some("bob"));
        assert_eq!(base.retries, 5);
        assert_eq!(base.dag_id, "dag");
        assert!(base.task_group_id.is_none());
    }

    #[test]
    fn missing_owner_stays_unset() {
        let base = BaseOperator::from_args(args(json!({}))).unwrap();
        assert!(base.owner.is_none());
        assert_eq!(base.retries, 0);
    }

    #[test]
    fn rejects_negative_retries() {
        let error = BaseOperator::from_args(args(json!({"retries": -1}))).unwrap_err();
        assert_eq!(error.kind, CoreErrorKind::InvalidInput);
        assert_eq!(error.task, None);
        assert!(error.message.contains("'retries'"));
    }

    #[test]
    fn rejects_non_string_owner() {
        let error = BaseOperator::from_args(args(json!({"owner": 7}))).unwrap_err();
        assert_eq!(error.kind, CoreErrorKind::InvalidInput);
        assert_eq!(error.operator_class.as_deref(), Some("pkg.mod.Op"));
    }

    #[test]
    fn records_task_group_id() {
        let group = TaskGroup::new("extract");
        let mut grouped = args(json!({}));
        grouped.task_group = Some(&group);
        let base = BaseOperator::from_args(grouped).unwrap();
        assert_eq!(base.task_group_id.as_deref(), Some("extract"));
    }
}
