//! Unique identifiers for trawler entities.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for a BuiltTask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuiltTaskId(Ulid);

impl BuiltTaskId {
    /// Generate a new BuiltTaskId
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for BuiltTaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BuiltTaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for BuiltTaskId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
