use serde::{Deserialize, Serialize};

use crate::models::{CoreError, CoreErrorKind, CoreResult};

/// How merged keys outside an operator's parameter surface are treated.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterValidation {
    #[default]
    Strict,
    Permissive,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub parameter_validation: ParameterValidation,
}

impl ResolverConfig {
    pub fn from_json(raw: &str) -> CoreResult<Self> {
        serde_json::from_str(raw).map_err(|error| {
            CoreError::new(
                CoreErrorKind::InvalidInput,
                format!("invalid resolver config: {error}"),
            )
        })
    }

    pub fn permissive() -> Self {
        Self {
            parameter_validation: ParameterValidation::Permissive,
        }
    }
}
