use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

use crate::models::OperatorDescriptor;
use crate::operators::OperatorFactory;

#[derive(Clone)]
pub struct OperatorEntry {
    pub descriptor: OperatorDescriptor,
    pub factory: OperatorFactory,
}

impl Debug for OperatorEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperatorEntry")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// A named export of a namespace.
///
/// Helpers are exports that are not operators (rules, hooks, constants) and
/// can never be bound to a task.
#[derive(Clone, Debug)]
pub enum Symbol {
    Operator(OperatorEntry),
    Helper { description: String },
}

#[derive(Clone, Debug)]
pub struct Namespace {
    path: String,
    symbols: BTreeMap<String, Symbol>,
}

impl Namespace {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            symbols: BTreeMap::new(),
        }
    }

    /// Exports an operator under its descriptor's class name, replacing any
    /// earlier export of that name.
    pub fn with_operator(
        mut self,
        descriptor: OperatorDescriptor,
        factory: OperatorFactory,
    ) -> Self {
        self.symbols.insert(
            descriptor.class_name.clone(),
            Symbol::Operator(OperatorEntry {
                descriptor,
                factory,
            }),
        );
        self
    }

    pub fn with_helper(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.symbols.insert(
            name.into(),
            Symbol::Helper {
                description: description.into(),
            },
        );
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn symbol(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn symbol_names(&self) -> impl Iterator<Item = &str> {
        self.symbols.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
