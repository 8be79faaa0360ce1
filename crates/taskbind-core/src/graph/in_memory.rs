use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::graph::{ExecutionGraph, TaskGroup};
use crate::models::{CoreError, CoreErrorKind, CoreResult, TaskId};
use crate::operators::Operator;

pub struct InMemoryDag {
    dag_id: String,
    state: Mutex<DagState>,
}

#[derive(Default)]
struct DagState {
    order: Vec<TaskId>,
    operators: HashMap<TaskId, Arc<dyn Operator>>,
    group_members: BTreeMap<String, Vec<TaskId>>,
}

impl InMemoryDag {
    pub fn new(dag_id: impl Into<String>) -> Self {
        Self {
            dag_id: dag_id.into(),
            state: Mutex::new(DagState::default()),
        }
    }

    pub fn len(&self) -> CoreResult<usize> {
        Ok(self.lock_state()?.order.len())
    }

    pub fn is_empty(&self) -> CoreResult<bool> {
        Ok(self.lock_state()?.order.is_empty())
    }

    /// Task ids in registration order.
    pub fn task_ids(&self) -> CoreResult<Vec<TaskId>> {
        Ok(self.lock_state()?.order.clone())
    }

    pub fn operator(&self, task_id: &TaskId) -> CoreResult<Option<Arc<dyn Operator>>> {
        Ok(self.lock_state()?.operators.get(task_id).cloned())
    }

    pub fn group_members(&self, group_id: &str) -> CoreResult<Vec<TaskId>> {
        Ok(self
            .lock_state()?
            .group_members
            .get(group_id)
            .cloned()
            .unwrap_or_default())
    }

    fn lock_state(&self) -> CoreResult<MutexGuard<'_, DagState>> {
        self.state.lock().map_err(|_| CoreError {
            task: None,
            operator_class: None,
            kind: CoreErrorKind::Internal,
            message: format!("dag '{}' state mutex poisoned", self.dag_id),
        })
    }
}

impl ExecutionGraph for InMemoryDag {
    fn dag_id(&self) -> &str {
        &self.dag_id
    }

    fn contains(&self, task_id: &TaskId) -> CoreResult<bool> {
        Ok(self.lock_state()?.operators.contains_key(task_id))
    }

    fn register(&self, operator: Arc<dyn Operator>, group: Option<&TaskGroup>) -> CoreResult<()> {
        let mut state = self.lock_state()?;
        let task_id = operator.task_id().clone();

        if state.operators.contains_key(&task_id) {
            return Err(CoreError {
                task: None,
                operator_class: Some(operator.operator_class().to_string()),
                kind: CoreErrorKind::DuplicateTask,
                message: format!(
                    "task '{task_id}' is already registered in dag '{}'",
                    self.dag_id
                ),
            });
        }

        if let Some(group) = group {
            state
                .group_members
                .entry(group.group_id().to_string())
                .or_default()
                .push(task_id.clone());
        }
        state.order.push(task_id.clone());
        state.operators.insert(task_id, operator);

        Ok(())
    }
}
