//! Callable building blocks of a task descriptor.
//!
//! Callability is enforced by the type system: each wrapper holds a
//! reference-counted `dyn Fn`, so a descriptor can only ever be configured
//! with something invokable, and built tasks can share one routine across a
//! whole batch.

use std::fmt;
use std::sync::Arc;

use crate::hooks::HookMap;
use crate::Params;

/// The main routine of a task.
///
/// Receives the parameters of one built task plus the descriptor's hook map.
/// When and how it runs is the executor's contract, not this crate's.
#[derive(Clone)]
pub struct MainRoutine(Arc<dyn Fn(&Params, &HookMap) -> anyhow::Result<Params> + Send + Sync>);

impl MainRoutine {
    /// Wrap a routine.
    pub fn new<F>(routine: F) -> Self
    where
        F: Fn(&Params, &HookMap) -> anyhow::Result<Params> + Send + Sync + 'static,
    {
        Self(Arc::new(routine))
    }

    /// Invoke the routine.
    pub fn call(&self, params: &Params, hooks: &HookMap) -> anyhow::Result<Params> {
        (self.0)(params, hooks)
    }

    /// Whether two handles point at the same underlying routine.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for MainRoutine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MainRoutine")
    }
}

/// A lifecycle hook.
///
/// Invoked by the executor at points it controls, with an executor-defined
/// payload.
#[derive(Clone)]
pub struct Hook(Arc<dyn Fn(&Params) -> anyhow::Result<()> + Send + Sync>);

impl Hook {
    /// Wrap a hook callback.
    pub fn new<F>(hook: F) -> Self
    where
        F: Fn(&Params) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Self(Arc::new(hook))
    }

    /// Invoke the hook.
    pub fn call(&self, payload: &Params) -> anyhow::Result<()> {
        (self.0)(payload)
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hook")
    }
}

/// What a builder decided a descriptor expands into.
#[derive(Debug, Clone)]
pub enum BuildPlan {
    /// Exactly one task with this payload.
    Single(Params),
    /// One task per element, in order. Elements carry no type constraint.
    Many(Vec<Params>),
}

impl From<Params> for BuildPlan {
    fn from(params: Params) -> Self {
        Self::Single(params)
    }
}

impl From<Vec<Params>> for BuildPlan {
    fn from(list: Vec<Params>) -> Self {
        Self::Many(list)
    }
}

/// The builder routine: decides how many tasks a descriptor expands into and
/// what parameters each receives.
#[derive(Clone)]
pub struct Builder(Arc<dyn Fn() -> anyhow::Result<BuildPlan> + Send + Sync>);

impl Builder {
    /// Wrap an infallible builder returning a payload or a batch of payloads.
    pub fn new<F, P>(builder: F) -> Self
    where
        F: Fn() -> P + Send + Sync + 'static,
        P: Into<BuildPlan>,
    {
        Self(Arc::new(move || Ok(builder().into())))
    }

    /// Wrap a builder that may fail, e.g. one that lists work items from a
    /// source that can reject the request.
    pub fn fallible<F>(builder: F) -> Self
    where
        F: Fn() -> anyhow::Result<BuildPlan> + Send + Sync + 'static,
    {
        Self(Arc::new(builder))
    }

    /// Invoke the builder.
    pub fn call(&self) -> anyhow::Result<BuildPlan> {
        (self.0)()
    }
}

impl Default for Builder {
    /// One instance with empty parameters.
    fn default() -> Self {
        Self::new(|| serde_json::json!({}))
    }
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Builder")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_builder_yields_empty_params() {
        let plan = Builder::default().call().unwrap();
        match plan {
            BuildPlan::Single(params) => assert_eq!(params, json!({})),
            BuildPlan::Many(_) => panic!("default builder must yield a single task"),
        }
    }

    #[test]
    fn test_vec_converts_to_many() {
        let plan: BuildPlan = vec![json!(1), json!(2)].into();
        assert!(matches!(plan, BuildPlan::Many(ref list) if list.len() == 2));
    }

    #[test]
    fn test_value_converts_to_single() {
        // A JSON array chosen as a single payload stays a single payload;
        // fan-out happens only through the Many variant.
        let plan: BuildPlan = json!([1, 2]).into();
        assert!(matches!(plan, BuildPlan::Single(_)));
    }

    #[test]
    fn test_ptr_eq_tracks_identity() {
        let routine = MainRoutine::new(|params, _| Ok(params.clone()));
        let alias = routine.clone();
        let other = MainRoutine::new(|params, _| Ok(params.clone()));

        assert!(routine.ptr_eq(&alias));
        assert!(!routine.ptr_eq(&other));
    }
}
