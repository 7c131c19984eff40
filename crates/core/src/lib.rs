//! Trawler core task model.
//!
//! This crate defines the declarative task descriptor at the heart of the
//! trawler job framework: a reusable template (one main routine, one hook
//! set, one builder) that expands into a batch of concrete, executor-ready
//! units of work. The descriptor is pure configuration: it never runs the
//! main routine or dispatches hooks, and it owns no retry policy. An
//! external executor consumes the built tasks, looks hooks up by name on the
//! descriptor, and increments each task's retry counter as it sees fit.

#![warn(missing_docs)]

// Core identities
mod id;

// Descriptor configuration
mod descriptor;
mod hooks;
mod routine;

// Build products
mod built;

// Re-exports
pub use id::BuiltTaskId;

pub use built::BuiltTask;
pub use descriptor::TaskDescriptor;
pub use hooks::HookMap;
pub use routine::{BuildPlan, Builder, Hook, MainRoutine};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;

/// Parameter payload assigned to a built task
pub type Params = serde_json::Value;
