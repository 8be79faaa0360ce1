use std::collections::BTreeMap;

use serde_json::Value;

use crate::models::{OperatorDescriptor, Task};
use crate::operators::OperatorParams;
use crate::{EXTRA_CONTEXT_KEY, OWNER_KEY};

/// Configuration sources, lowest precedence first.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ConfigSource {
    Owner,
    TaskConfig,
    ExtraContext,
    Arguments,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfigLayer {
    pub source: ConfigSource,
    pub entries: Vec<(String, Value)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MergedEntry {
    pub value: Value,
    pub source: ConfigSource,
}

/// Keyword configuration for one task, keyed in sorted order, remembering
/// which source supplied each value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MergedConfig {
    entries: BTreeMap<String, MergedEntry>,
}

impl MergedConfig {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    pub fn source(&self, key: &str) -> Option<ConfigSource> {
        self.entries.get(key).map(|entry| entry.source)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_params(&self) -> OperatorParams {
        self.entries
            .iter()
            .map(|(key, entry)| (key.clone(), entry.value.clone()))
            .collect()
    }

    pub fn into_params(self) -> OperatorParams {
        self.entries
            .into_iter()
            .map(|(key, entry)| (key, entry.value))
            .collect()
    }
}

/// Builds the task's configuration layers in precedence order.
///
/// The owner layer is empty when the owner is unset, and the extra-context
/// layer is empty when the operator does not accept `extra_context`.
pub fn config_layers(task: &Task, accepts_extra_context: bool) -> Vec<ConfigLayer> {
    let mut owner = Vec::new();
    if !task.owner.is_empty() {
        owner.push((OWNER_KEY.to_string(), Value::String(task.owner.clone())));
    }

    let mut extra_context = Vec::new();
    if accepts_extra_context {
        extra_context.push((EXTRA_CONTEXT_KEY.to_string(), task.extra_context.clone()));
    }

    vec![
        ConfigLayer {
            source: ConfigSource::Owner,
            entries: owner,
        },
        ConfigLayer {
            source: ConfigSource::TaskConfig,
            entries: map_entries(&task.airflow_task_config),
        },
        ConfigLayer {
            source: ConfigSource::ExtraContext,
            entries: extra_context,
        },
        ConfigLayer {
            source: ConfigSource::Arguments,
            entries: map_entries(&task.arguments),
        },
    ]
}

/// Applies layers by ascending source precedence; later values win per key.
pub fn merge_layers(layers: impl IntoIterator<Item = ConfigLayer>) -> MergedConfig {
    let mut layers: Vec<ConfigLayer> = layers.into_iter().collect();
    layers.sort_by_key(|layer| layer.source);

    let mut merged = MergedConfig::default();
    for layer in layers {
        for (key, value) in layer.entries {
            let entry = MergedEntry {
                value,
                source: layer.source,
            };
            if let Some(previous) = merged.entries.insert(key.clone(), entry) {
                tracing::trace!(
                    key = %key,
                    from = ?previous.source,
                    to = ?layer.source,
                    "configuration key overridden"
                );
            }
        }
    }
    merged
}

pub fn merge_task_config(task: &Task, descriptor: &OperatorDescriptor) -> MergedConfig {
    merge_layers(config_layers(task, descriptor.accepts_extra_context))
}

fn map_entries(map: &serde_json::Map<String, Value>) -> Vec<(String, Value)> {
    map.iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
