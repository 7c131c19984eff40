//! Task descriptor and the build fan-out.

use std::fmt;

use tracing::debug;

use crate::built::BuiltTask;
use crate::hooks::HookMap;
use crate::routine::{BuildPlan, Builder, Hook, MainRoutine};

/// A reusable task template.
///
/// Holds one main routine, one set of named hooks, and one builder routine.
/// Calling [`build`](Self::build) expands the template into concrete
/// [`BuiltTask`]s whose cardinality is decided by the builder, so a single
/// declarative definition can cover a whole batch of work items (one per
/// page of a paginated source, for instance). The descriptor keeps ownership
/// of the hook map; executors look hooks up here by name after taking the
/// built tasks away.
#[derive(Clone, Default)]
pub struct TaskDescriptor {
    main: Option<MainRoutine>,
    hooks: HookMap,
    builder: Builder,
}

impl TaskDescriptor {
    /// Create a descriptor whose builder yields one task with empty
    /// parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the main routine, replacing any previous one.
    pub fn with_main(mut self, routine: MainRoutine) -> Self {
        self.main = Some(routine);
        self
    }

    /// Append a hook under `name`.
    ///
    /// Repeated calls accumulate in registration order; nothing is ever
    /// overwritten.
    pub fn add_hook(mut self, name: impl Into<String>, hook: Hook) -> Self {
        self.hooks.append(name, hook);
        self
    }

    /// Append one hook per entry.
    ///
    /// Each entry appends exactly one callable under its name. To stack
    /// several callbacks on one name, register repeatedly or use distinct
    /// names.
    pub fn add_hooks<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Hook)>,
        S: Into<String>,
    {
        for (name, hook) in entries {
            self.hooks.append(name, hook);
        }
        self
    }

    /// Set the builder routine, replacing any previous one.
    pub fn with_builder(mut self, builder: Builder) -> Self {
        self.builder = builder;
        self
    }

    /// The configured main routine, if set.
    pub fn main(&self) -> Option<&MainRoutine> {
        self.main.as_ref()
    }

    /// Read access to the hook map for the executor.
    pub fn hooks(&self) -> &HookMap {
        &self.hooks
    }

    /// Expand the descriptor into built tasks.
    ///
    /// Runs the builder once. A [`BuildPlan::Many`] plan yields one task per
    /// element in the same order; a [`BuildPlan::Single`] plan yields exactly
    /// one. Every task shares the descriptor's main routine and starts with
    /// zero retries. Builder errors propagate unchanged. Whether a main
    /// routine was ever set is not checked here; running a task without one
    /// is the executor's responsibility boundary.
    pub fn build(&self) -> anyhow::Result<Vec<BuiltTask>> {
        let plan = self.builder.call()?;

        let tasks = match plan {
            BuildPlan::Single(params) => vec![BuiltTask::new(self.main.clone(), params)],
            BuildPlan::Many(list) => list
                .into_iter()
                .map(|params| BuiltTask::new(self.main.clone(), params))
                .collect(),
        };

        debug!("Built {} task(s) from descriptor", tasks.len());
        Ok(tasks)
    }
}

impl fmt::Debug for TaskDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskDescriptor")
            .field("main", &self.main.is_some())
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}
