//! Scheduled security tasks.
//!
//! # Data Flow
//! ```text
//! submitted action token + task names
//!     → mutator.rs (token validation, batch application)
//!     → TaskScheduler (external; owns all task state)
//!     → MutationReport (per-task failures collected, batch continues)
//! ```
//!
//! # Design Decisions
//! - Task state lives with the scheduler; this crate only issues
//!   mutation requests (run-now, remove, reschedule)
//! - Re-scheduling starts from the task's current next-run time to
//!   preserve cadence continuity

pub mod memory;
pub mod mutator;

pub use memory::InMemoryScheduler;
pub use mutator::{MutationReport, ScheduleAction, ScheduleMutator};

use std::collections::BTreeMap;

use crate::error::SchedulerFailure;

/// One scheduled occurrence of a task hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledEvent {
    /// Recurrence token, `None` for one-off events.
    pub schedule: Option<String>,
    /// Arguments passed to the hook when it fires.
    pub args: Vec<String>,
}

/// Timestamp-ordered view of every scheduled event, keyed by unix time
/// and then by hook name.
pub type ScheduleTable = BTreeMap<u64, BTreeMap<String, Vec<ScheduledEvent>>>;

/// External task scheduler consumed by the mutation engine.
pub trait TaskScheduler {
    /// Schedule one execution of `task` at unix time `at`.
    fn schedule_once(&mut self, task: &str, at: u64) -> Result<(), SchedulerFailure>;

    /// Schedule `task` to recur at `frequency`, first firing at
    /// `starting_at`.
    fn schedule_recurring(
        &mut self,
        task: &str,
        frequency: &str,
        starting_at: u64,
    ) -> Result<(), SchedulerFailure>;

    /// Remove every scheduled occurrence of `task`.
    fn clear(&mut self, task: &str) -> Result<(), SchedulerFailure>;

    /// Unix time of the next occurrence of `task`, if scheduled.
    fn next_run_time(&self, task: &str) -> Option<u64>;

    /// Every scheduled event.
    fn list_all(&self) -> ScheduleTable;

    /// Recurrence tokens currently registered with the scheduler.
    fn frequencies(&self) -> Vec<String>;
}

/// Current unix time in seconds.
pub(crate) fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
