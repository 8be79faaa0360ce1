use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub String);

impl TaskId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Declarative description of one unit of work.
///
/// Tasks are produced upstream and only read here. An empty `owner` means
/// the owner is unset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub operator_class: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub airflow_task_config: Map<String, Value>,
    #[serde(default = "empty_extra_context")]
    pub extra_context: Value,
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl Task {
    pub fn new(id: impl Into<TaskId>, operator_class: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            operator_class: operator_class.into(),
            owner: String::new(),
            airflow_task_config: Map::new(),
            extra_context: empty_extra_context(),
            arguments: Map::new(),
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn with_task_config(mut self, key: impl Into<String>, value: Value) -> Self {
        self.airflow_task_config.insert(key.into(), value);
        self
    }

    pub fn with_extra_context(mut self, extra_context: Value) -> Self {
        self.extra_context = extra_context;
        self
    }

    pub fn with_argument(mut self, key: impl Into<String>, value: Value) -> Self {
        self.arguments.insert(key.into(), value);
        self
    }
}

fn empty_extra_context() -> Value {
    Value::Object(Map::new())
}
