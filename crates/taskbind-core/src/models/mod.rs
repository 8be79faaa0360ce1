pub mod error;
pub mod operator;
pub mod task;

pub use error::{CoreError, CoreErrorKind, CoreResult};
pub use operator::{OperatorDescriptor, ParameterSurface};
pub use task::{Task, TaskId};
