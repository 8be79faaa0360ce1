pub mod base;
pub mod empty;
pub mod generic;
pub mod operator;

pub use base::{BASE_OPERATOR_PARAMETERS, BaseOperator};
pub use empty::{EMPTY_OPERATOR, EmptyOperator};
pub use generic::{GENERIC_OPERATOR, GenericOperator};
pub use operator::{Operator, OperatorArgs, OperatorFactory, OperatorParams, factory};
