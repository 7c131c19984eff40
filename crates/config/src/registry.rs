//! Routine registry wiring definitions to real callables.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;
use trawler_core::{Builder, Hook, MainRoutine, Params, TaskDescriptor};

use crate::definition::{ConfigError, TaskDefinition};

/// Named callables available to task definitions.
///
/// Definitions are data; the routines they reference live here, registered
/// in code before any definition is resolved. Registering a name twice
/// replaces the earlier entry.
#[derive(Default)]
pub struct RoutineRegistry {
    mains: HashMap<String, MainRoutine>,
    hooks: HashMap<String, Hook>,
    builders: HashMap<String, Builder>,
}

impl RoutineRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a main routine under `name`.
    pub fn register_main(&mut self, name: impl Into<String>, routine: MainRoutine) -> &mut Self {
        self.mains.insert(name.into(), routine);
        self
    }

    /// Register a hook under `name`.
    pub fn register_hook(&mut self, name: impl Into<String>, hook: Hook) -> &mut Self {
        self.hooks.insert(name.into(), hook);
        self
    }

    /// Register a builder under `name`.
    pub fn register_builder(&mut self, name: impl Into<String>, builder: Builder) -> &mut Self {
        self.builders.insert(name.into(), builder);
        self
    }

    /// Resolve a definition into a configured descriptor.
    ///
    /// Fails immediately on the first unknown name and on a definition that
    /// carries both `params` and `builder`. Nothing is deferred to build
    /// time.
    pub fn resolve(&self, definition: &TaskDefinition) -> Result<TaskDescriptor, ConfigError> {
        let mut descriptor = TaskDescriptor::new();

        if let Some(name) = &definition.main {
            let routine = self
                .mains
                .get(name)
                .ok_or_else(|| ConfigError::UnknownMain(name.clone()))?;
            descriptor = descriptor.with_main(routine.clone());
        }

        for (slot, refs) in &definition.hooks {
            for name in refs.names() {
                let hook = self
                    .hooks
                    .get(name)
                    .ok_or_else(|| ConfigError::UnknownHook(name.clone()))?;
                descriptor = descriptor.add_hook(slot.clone(), hook.clone());
            }
        }

        match (&definition.params, &definition.builder) {
            (Some(_), Some(_)) => return Err(ConfigError::BuilderConflict),
            (Some(spec), None) => {
                let plan = spec.clone().into_plan();
                descriptor = descriptor.with_builder(Builder::new(move || plan.clone()));
            }
            (None, Some(name)) => {
                let builder = self
                    .builders
                    .get(name)
                    .ok_or_else(|| ConfigError::UnknownBuilder(name.clone()))?;
                descriptor = descriptor.with_builder(builder.clone());
            }
            (None, None) => {}
        }

        debug!(
            "Resolved task definition ({} hook name(s))",
            descriptor.hooks().len()
        );
        Ok(descriptor)
    }

    /// Parse and resolve a definition from a JSON value.
    pub fn resolve_value(&self, value: Params) -> Result<TaskDescriptor, ConfigError> {
        self.resolve(&TaskDefinition::from_value(value)?)
    }
}

impl fmt::Debug for RoutineRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutineRegistry")
            .field("mains", &self.mains.len())
            .field("hooks", &self.hooks.len())
            .field("builders", &self.builders.len())
            .finish()
    }
}
