use crate::models::TaskId;

/// Optional grouping container for operators inside one graph.
///
/// With `prefix_group_id` set (the default), member task ids and nested group
/// ids are qualified as `<group_id>.<id>`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaskGroup {
    group_id: String,
    parent_group_id: Option<String>,
    prefix_group_id: bool,
}

impl TaskGroup {
    pub fn new(group_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            parent_group_id: None,
            prefix_group_id: true,
        }
    }

    pub fn without_prefix(mut self) -> Self {
        self.prefix_group_id = false;
        self
    }

    pub fn nested(&self, child_id: &str) -> Self {
        Self {
            group_id: self.qualify(child_id),
            parent_group_id: Some(self.group_id.clone()),
            prefix_group_id: true,
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn parent_group_id(&self) -> Option<&str> {
        self.parent_group_id.as_deref()
    }

    pub fn prefix_group_id(&self) -> bool {
        self.prefix_group_id
    }

    pub fn child_id(&self, task_id: &TaskId) -> TaskId {
        TaskId(self.qualify(task_id.as_str()))
    }

    fn qualify(&self, id: &str) -> String {
        if self.prefix_group_id {
            format!("{}.{}", self.group_id, id)
        } else {
            id.to_string()
        }
    }
}
