//! Trawler dynamic configuration layer.
//!
//! Task definitions arrive as user-authored JSON. This crate validates their
//! shape and resolves routine references against a registry of named
//! callables, producing ready-to-build descriptors. It is the one place
//! where configuration is dynamic enough to need runtime guards; the typed
//! API in `trawler-core` rejects misconfiguration at compile time.

mod definition;
mod registry;

pub use definition::{ConfigError, HookRefs, ParamsSpec, TaskDefinition};
pub use registry::RoutineRegistry;
