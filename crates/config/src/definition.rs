//! Task definitions loaded from dynamic configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use trawler_core::{BuildPlan, Params};

/// Errors raised while parsing or resolving a task definition.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Definition references a main routine name that is not registered.
    #[error("main routine `{0}` is not registered")]
    UnknownMain(String),

    /// Definition references a hook name that is not registered.
    #[error("hook `{0}` is not registered")]
    UnknownHook(String),

    /// Definition references a builder name that is not registered.
    #[error("builder `{0}` is not registered")]
    UnknownBuilder(String),

    /// Definition carries both static `params` and a named `builder`.
    #[error("definition sets both `params` and `builder`; pick one")]
    BuilderConflict,

    /// Definition is not a plain mapping of the expected shape.
    #[error("invalid task definition: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Serde image of a task descriptor.
///
/// Callables are referenced by the name they were registered under in a
/// [`RoutineRegistry`](crate::RoutineRegistry); parameters are embedded as
/// plain JSON. The top level must be a mapping, as must `hooks`; anything
/// else fails to parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskDefinition {
    /// Registered name of the main routine.
    pub main: Option<String>,

    /// Hook-name to registered callable name(s), appended in list order.
    #[serde(default)]
    pub hooks: HashMap<String, HookRefs>,

    /// Static parameter payload. An array fans out into one task per
    /// element; any other value builds a single task.
    pub params: Option<ParamsSpec>,

    /// Registered name of a builder routine.
    pub builder: Option<String>,
}

impl TaskDefinition {
    /// Parse a definition from a JSON value.
    pub fn from_value(value: Params) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Parse a definition from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// One registered hook name or an ordered list of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HookRefs {
    /// A single registered name.
    One(String),
    /// Ordered names, appended front to back.
    Many(Vec<String>),
}

impl HookRefs {
    /// Referenced names, in order.
    pub fn names(&self) -> &[String] {
        match self {
            Self::One(name) => std::slice::from_ref(name),
            Self::Many(names) => names.as_slice(),
        }
    }
}

/// Static parameter payload of a definition.
///
/// Deserialization keeps the source's shape rule at this boundary: a JSON
/// array means fan-out, anything else means a single task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamsSpec {
    /// A JSON array: one task per element, in order.
    Many(Vec<Params>),
    /// Any other JSON value: a single task.
    One(Params),
}

impl ParamsSpec {
    /// Convert into the core build plan.
    pub fn into_plan(self) -> BuildPlan {
        match self {
            Self::Many(list) => BuildPlan::Many(list),
            Self::One(value) => BuildPlan::Single(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_params_parse_as_fan_out() {
        let definition =
            TaskDefinition::from_value(json!({"params": [{"page": 1}, {"page": 2}]})).unwrap();

        match definition.params.unwrap() {
            ParamsSpec::Many(list) => assert_eq!(list.len(), 2),
            ParamsSpec::One(_) => panic!("array params must parse as Many"),
        }
    }

    #[test]
    fn test_non_array_params_parse_as_single() {
        let definition = TaskDefinition::from_value(json!({"params": {"q": "rust"}})).unwrap();
        assert!(matches!(definition.params, Some(ParamsSpec::One(_))));

        let definition = TaskDefinition::from_value(json!({"params": 42})).unwrap();
        assert!(matches!(definition.params, Some(ParamsSpec::One(_))));
    }

    #[test]
    fn test_hooks_must_be_a_mapping() {
        let err = TaskDefinition::from_value(json!({"hooks": ["log", "notify"]})).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_top_level_must_be_a_mapping() {
        let err = TaskDefinition::from_value(json!([{"main": "scrape"}])).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_hook_refs_accept_one_or_many() {
        let definition = TaskDefinition::from_value(json!({
            "hooks": {"after-main": "log", "before-main": ["auth", "log"]}
        }))
        .unwrap();

        assert_eq!(definition.hooks["after-main"].names(), ["log"]);
        assert_eq!(definition.hooks["before-main"].names(), ["auth", "log"]);
    }

    #[test]
    fn test_from_json_text() {
        let definition =
            TaskDefinition::from_json(r#"{"main": "scrape", "params": [1, 2, 3]}"#).unwrap();

        assert_eq!(definition.main.as_deref(), Some("scrape"));
        assert!(matches!(definition.params, Some(ParamsSpec::Many(_))));
    }
}
