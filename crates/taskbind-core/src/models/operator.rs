use std::collections::BTreeSet;

/// Keyword parameters an operator constructor accepts.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParameterSurface {
    Open,
    Closed(BTreeSet<String>),
}

impl ParameterSurface {
    pub fn closed<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Closed(names.into_iter().map(Into::into).collect())
    }

    pub fn accepts(&self, key: &str) -> bool {
        match self {
            Self::Open => true,
            Self::Closed(names) => names.contains(key),
        }
    }

    /// Keys the surface does not accept, in the order given.
    pub fn unknown_keys<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        keys.into_iter()
            .filter(|key| !self.accepts(key))
            .map(str::to_string)
            .collect()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OperatorDescriptor {
    pub class_name: String,
    pub parameters: ParameterSurface,
    /// Operators that cannot take the `extra_context` extension field leave this unset.
    pub accepts_extra_context: bool,
}

impl OperatorDescriptor {
    pub fn new(class_name: impl Into<String>, parameters: ParameterSurface) -> Self {
        Self {
            class_name: class_name.into(),
            parameters,
            accepts_extra_context: true,
        }
    }

    pub fn without_extra_context(mut self) -> Self {
        self.accepts_extra_context = false;
        self
    }
}
