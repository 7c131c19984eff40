//! Named lifecycle hook storage.

use std::collections::HashMap;
use std::fmt;

use crate::routine::Hook;

/// Ordered hook sequences keyed by hook name.
///
/// Names are caller-defined strings with no fixed vocabulary; "before-main"
/// or "on-retry" mean whatever the executor wants. A name with no registrations
/// is absent from the map, never present with an empty sequence. The map only
/// stores and exposes hooks; invoking them, and deciding when, belongs to the
/// executor.
#[derive(Clone, Default)]
pub struct HookMap {
    slots: HashMap<String, Vec<Hook>>,
}

impl HookMap {
    /// Create an empty hook map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hook to the named sequence, initializing it on first insert.
    pub fn append(&mut self, name: impl Into<String>, hook: Hook) {
        self.slots.entry(name.into()).or_default().push(hook);
    }

    /// Hooks registered under `name`, in registration order.
    pub fn get(&self, name: &str) -> Option<&[Hook]> {
        self.slots.get(name).map(Vec::as_slice)
    }

    /// Whether any hook is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Registered hook names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Number of names with at least one hook.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no hooks are registered at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Debug for HookMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, hooks) in &self.slots {
            map.entry(name, &hooks.len());
        }
        map.finish()
    }
}
