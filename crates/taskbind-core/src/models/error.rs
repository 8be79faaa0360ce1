use thiserror::Error;

use crate::models::TaskId;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CoreErrorKind {
    MalformedIdentifier,
    NamespaceNotFound,
    SymbolNotFound,
    TypeConformance,
    UnknownParameter,
    DuplicateRegistration,
    DuplicateTask,
    InvalidInput,
    Internal,
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{kind:?}: {message}")]
pub struct CoreError {
    pub task: Option<TaskId>,
    pub operator_class: Option<String>,
    pub kind: CoreErrorKind,
    pub message: String,
}

pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    pub fn new(kind: CoreErrorKind, message: impl Into<String>) -> Self {
        Self {
            task: None,
            operator_class: None,
            kind,
            message: message.into(),
        }
    }

    /// Fills in the task and operator class unless the error already names them.
    pub fn attributed(self, task: &TaskId, operator_class: &str) -> Self {
        Self {
            task: self.task.or_else(|| Some(task.clone())),
            operator_class: self
                .operator_class
                .or_else(|| Some(operator_class.to_string())),
            kind: self.kind,
            message: self.message,
        }
    }
}
