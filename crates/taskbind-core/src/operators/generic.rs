use crate::models::{CoreResult, OperatorDescriptor, ParameterSurface};
use crate::operators::{BaseOperator, Operator, OperatorArgs, OperatorFactory, factory};

pub const GENERIC_OPERATOR: &str = "GenericOperator";

/// Operator with an open parameter surface; keeps every parameter it is given.
#[derive(Clone, Debug, PartialEq)]
pub struct GenericOperator {
    base: BaseOperator,
}

impl GenericOperator {
    pub fn new(args: OperatorArgs<'_>) -> CoreResult<Self> {
        Ok(Self {
            base: BaseOperator::from_args(args)?,
        })
    }

    pub fn descriptor() -> OperatorDescriptor {
        Self::descriptor_named(GENERIC_OPERATOR)
    }

    /// Descriptor for exporting this operator under another symbol name.
    pub fn descriptor_named(class_name: &str) -> OperatorDescriptor {
        OperatorDescriptor::new(class_name, ParameterSurface::Open)
    }

    pub fn factory() -> OperatorFactory {
        factory(|args| {
            let operator: Box<dyn Operator> = Box::new(Self::new(args)?);
            Ok(operator)
        })
    }
}

impl Operator for GenericOperator {
    fn base(&self) -> &BaseOperator {
        &self.base
    }
}
