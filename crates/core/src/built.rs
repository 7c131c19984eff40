//! Built task, the product of expanding a descriptor.

use std::fmt;

use crate::id::BuiltTaskId;
use crate::routine::MainRoutine;
use crate::{Params, Time};

/// One concrete unit of work produced by
/// [`TaskDescriptor::build`](crate::TaskDescriptor::build).
///
/// Detached from its descriptor: it carries its own parameters and retry
/// counter plus a shared handle on the main routine. Everything except the
/// retry counter is fixed at build time. The counter belongs to the external
/// executor; this crate initializes it to zero and never touches it again.
pub struct BuiltTask {
    id: BuiltTaskId,
    main: Option<MainRoutine>,
    params: Params,
    retries: u32,
    created_at: Time,
}

impl BuiltTask {
    pub(crate) fn new(main: Option<MainRoutine>, params: Params) -> Self {
        Self {
            id: BuiltTaskId::new(),
            main,
            params,
            retries: 0,
            created_at: chrono::Utc::now(),
        }
    }

    /// Unique identity of this unit of work.
    pub fn id(&self) -> BuiltTaskId {
        self.id
    }

    /// Parameters assigned to this instance.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The shared main routine, if one was configured at build time.
    pub fn main(&self) -> Option<&MainRoutine> {
        self.main.as_ref()
    }

    /// Retries performed so far. Starts at zero.
    pub fn retries(&self) -> u32 {
        self.retries
    }

    /// Record one retry and return the updated count.
    pub fn record_retry(&mut self) -> u32 {
        self.retries += 1;
        self.retries
    }

    /// When this task was built.
    pub fn created_at(&self) -> Time {
        self.created_at
    }
}

impl fmt::Debug for BuiltTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltTask")
            .field("id", &self.id)
            .field("main", &self.main.is_some())
            .field("params", &self.params)
            .field("retries", &self.retries)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_retry_counter_starts_at_zero_and_increments() {
        let mut task = BuiltTask::new(None, json!({}));

        assert_eq!(task.retries(), 0);
        assert_eq!(task.record_retry(), 1);
        assert_eq!(task.record_retry(), 2);
        assert_eq!(task.retries(), 2);
    }

    #[test]
    fn test_each_task_gets_its_own_id() {
        let a = BuiltTask::new(None, json!({}));
        let b = BuiltTask::new(None, json!({}));
        assert_ne!(a.id(), b.id());
    }
}
