use std::fmt::Debug;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::graph::TaskGroup;
use crate::models::{CoreResult, TaskId};
use crate::operators::BaseOperator;

pub type OperatorParams = Map<String, Value>;

/// Everything a factory receives to construct one operator.
#[derive(Clone, Debug)]
pub struct OperatorArgs<'a> {
    pub task_id: TaskId,
    pub operator_class: &'a str,
    pub dag_id: &'a str,
    pub task_group: Option<&'a TaskGroup>,
    pub params: OperatorParams,
}

/// Executable-node contract every registered operator satisfies.
pub trait Operator: Send + Sync + Debug {
    fn base(&self) -> &BaseOperator;

    fn task_id(&self) -> &TaskId {
        &self.base().task_id
    }

    fn operator_class(&self) -> &str {
        &self.base().operator_class
    }

    fn dag_id(&self) -> &str {
        &self.base().dag_id
    }

    fn task_group_id(&self) -> Option<&str> {
        self.base().task_group_id.as_deref()
    }

    fn owner(&self) -> Option<&str> {
        self.base().owner.as_deref()
    }

    fn retries(&self) -> u32 {
        self.base().retries
    }

    fn params(&self) -> &OperatorParams {
        &self.base().params
    }

    fn extra_context(&self) -> Option<&Value> {
        self.base().params.get(crate::EXTRA_CONTEXT_KEY)
    }
}

pub type OperatorFactory =
    Arc<dyn Fn(OperatorArgs<'_>) -> CoreResult<Box<dyn Operator>> + Send + Sync>;

pub fn factory<F>(construct: F) -> OperatorFactory
where
    F: Fn(OperatorArgs<'_>) -> CoreResult<Box<dyn Operator>> + Send + Sync + 'static,
{
    Arc::new(construct)
}
