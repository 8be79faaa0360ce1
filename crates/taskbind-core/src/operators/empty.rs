use crate::models::{CoreResult, OperatorDescriptor, ParameterSurface};
use crate::operators::{
    BASE_OPERATOR_PARAMETERS, BaseOperator, Operator, OperatorArgs, OperatorFactory, factory,
};

pub const EMPTY_OPERATOR: &str = "EmptyOperator";

/// Operator that does nothing when executed.
///
/// Its constructor only takes the base parameters, so it opts out of the
/// `extra_context` extension field.
#[derive(Clone, Debug, PartialEq)]
pub struct EmptyOperator {
    base: BaseOperator,
}

impl EmptyOperator {
    pub fn new(args: OperatorArgs<'_>) -> CoreResult<Self> {
        Ok(Self {
            base: BaseOperator::from_args(args)?,
        })
    }

    pub fn descriptor() -> OperatorDescriptor {
        Self::descriptor_named(EMPTY_OPERATOR)
    }

    /// Descriptor for exporting this operator under another symbol name.
    pub fn descriptor_named(class_name: &str) -> OperatorDescriptor {
        OperatorDescriptor::new(
            class_name,
            ParameterSurface::closed(BASE_OPERATOR_PARAMETERS.iter().copied()),
        )
        .without_extra_context()
    }

    pub fn factory() -> OperatorFactory {
        factory(|args| {
            let operator: Box<dyn Operator> = Box::new(Self::new(args)?);
            Ok(operator)
        })
    }
}

impl Operator for EmptyOperator {
    fn base(&self) -> &BaseOperator {
        &self.base
    }
}
