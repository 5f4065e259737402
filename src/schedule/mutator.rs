//! Batch mutations over scheduled tasks.
//!
//! # Design Decisions
//! - The action token is validated before any task is touched
//! - Individual scheduler failures never abort the rest of the batch

use crate::error::{Rejection, SchedulerFailure};

use super::{unix_now, TaskScheduler};

/// Delay applied to forced task execution.
const RUN_NOW_DELAY_SECS: u64 = 10;

/// Requested change to a batch of scheduled tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleAction {
    /// Schedule one extra execution a few seconds from now, leaving
    /// any recurring schedule untouched.
    RunNow,
    /// Clear every scheduled occurrence.
    Remove,
    /// Re-issue a recurring schedule at the given frequency.
    Reschedule(String),
}

impl ScheduleAction {
    /// Parse a submitted action token against the scheduler's
    /// registered frequencies plus the two fixed pseudo-actions.
    pub fn parse(token: &str, frequencies: &[String]) -> Result<Self, Rejection> {
        match token {
            "runnow" => Ok(Self::RunNow),
            "remove" => Ok(Self::Remove),
            _ if frequencies.iter().any(|f| f == token) => {
                Ok(Self::Reschedule(token.to_string()))
            }
            _ => Err(Rejection::UnknownAction(token.to_string())),
        }
    }
}

/// Result of applying one action to a batch of tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationReport {
    /// Action that was applied.
    pub action: ScheduleAction,
    /// Tasks the action targeted.
    pub tasks: Vec<String>,
    /// Tasks the scheduler refused, with reasons.
    pub failures: Vec<SchedulerFailure>,
}

impl MutationReport {
    /// Count of tasks the scheduler accepted.
    pub fn applied(&self) -> usize {
        self.tasks.len() - self.failures.len()
    }

    /// Administrator-facing summary of the batch.
    pub fn summary(&self) -> String {
        let total = self.tasks.len();
        match &self.action {
            ScheduleAction::RunNow => {
                format!("{} tasks were scheduled to run in the next ten seconds", total)
            }
            ScheduleAction::Remove => format!("{} scheduled tasks were removed", total),
            ScheduleAction::Reschedule(frequency) => {
                format!("{} tasks were re-scheduled to run {}", total, frequency)
            }
        }
    }

    /// Audit line naming the affected tasks.
    pub fn audit_line(&self) -> String {
        let names = self.tasks.join(",");
        match &self.action {
            ScheduleAction::RunNow => format!("Force execution of scheduled tasks: {}", names),
            ScheduleAction::Remove => format!("Delete scheduled tasks: {}", names),
            ScheduleAction::Reschedule(frequency) => {
                format!("Re-configure scheduled tasks {}: {}", frequency, names)
            }
        }
    }
}

/// Applies validated schedule actions through the external scheduler.
#[derive(Debug)]
pub struct ScheduleMutator<'a, T: TaskScheduler> {
    scheduler: &'a mut T,
}

impl<'a, T: TaskScheduler> ScheduleMutator<'a, T> {
    pub fn new(scheduler: &'a mut T) -> Self {
        Self { scheduler }
    }

    /// Validate the action token, then apply it to every task.
    ///
    /// Validation is all-or-nothing; application is per-task, and one
    /// task's scheduler failure does not block the others.
    pub fn apply(&mut self, token: &str, tasks: &[String]) -> Result<MutationReport, Rejection> {
        let frequencies = self.scheduler.frequencies();
        let action = ScheduleAction::parse(token, &frequencies)?;

        if tasks.is_empty() {
            return Err(Rejection::NoTasksSelected);
        }

        let mut failures = Vec::new();

        for task in tasks {
            let outcome = match &action {
                ScheduleAction::RunNow => self
                    .scheduler
                    .schedule_once(task, unix_now() + RUN_NOW_DELAY_SECS),
                ScheduleAction::Remove => self.scheduler.clear(task),
                ScheduleAction::Reschedule(frequency) => {
                    // The new recurrence starts at the current next-run
                    // time, never at "now", so the cadence is preserved.
                    let start = self.scheduler.next_run_time(task).unwrap_or_else(unix_now);
                    self.scheduler.schedule_recurring(task, frequency, start)
                }
            };

            if let Err(failure) = outcome {
                tracing::warn!(
                    task = %failure.task,
                    reason = %failure.reason,
                    "scheduler rejected task mutation"
                );
                failures.push(failure);
            }
        }

        Ok(MutationReport {
            action,
            tasks: tasks.to_vec(),
            failures,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::InMemoryScheduler;
    use super::*;

    fn tasks(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn test_unknown_action_rejected_before_any_task() {
        let mut scheduler = InMemoryScheduler::new();
        let err = ScheduleMutator::new(&mut scheduler)
            .apply("yearly", &tasks(&["scan"]))
            .unwrap_err();

        assert_eq!(err, Rejection::UnknownAction("yearly".to_string()));
        assert!(scheduler.list_all().is_empty());
    }

    #[test]
    fn test_empty_task_list_rejected_for_every_action() {
        let mut scheduler = InMemoryScheduler::new();
        for token in ["runnow", "remove", "daily"] {
            let err = ScheduleMutator::new(&mut scheduler)
                .apply(token, &[])
                .unwrap_err();
            assert_eq!(err, Rejection::NoTasksSelected);
        }
    }

    #[test]
    fn test_run_now_schedules_with_short_delay() {
        let mut scheduler = InMemoryScheduler::new();
        let before = unix_now();

        let report = ScheduleMutator::new(&mut scheduler)
            .apply("runnow", &tasks(&["scan"]))
            .unwrap();

        assert_eq!(report.applied(), 1);
        let at = scheduler.next_run_time("scan").unwrap();
        assert!(at >= before + RUN_NOW_DELAY_SECS);
        assert!(at <= unix_now() + RUN_NOW_DELAY_SECS + 1);
    }

    #[test]
    fn test_remove_clears_each_task() {
        let mut scheduler = InMemoryScheduler::new();
        scheduler.schedule_once("scan", 2_000_000_000).unwrap();
        scheduler.schedule_once("report", 2_000_000_100).unwrap();

        let report = ScheduleMutator::new(&mut scheduler)
            .apply("remove", &tasks(&["scan", "report"]))
            .unwrap();

        assert_eq!(report.applied(), 2);
        assert_eq!(scheduler.next_run_time("scan"), None);
        assert_eq!(scheduler.next_run_time("report"), None);
    }

    #[test]
    fn test_reschedule_preserves_next_run_time() {
        let mut scheduler = InMemoryScheduler::new();
        scheduler.schedule_once("scan", 2_000_000_000).unwrap();

        ScheduleMutator::new(&mut scheduler)
            .apply("daily", &tasks(&["scan"]))
            .unwrap();

        assert_eq!(scheduler.next_run_time("scan"), Some(2_000_000_000));
        let table = scheduler.list_all();
        let events = &table[&2_000_000_000]["scan"];
        assert!(events
            .iter()
            .any(|e| e.schedule.as_deref() == Some("daily")));
    }

    #[test]
    fn test_summary_and_audit_line() {
        let report = MutationReport {
            action: ScheduleAction::Reschedule("daily".to_string()),
            tasks: tasks(&["scan", "report"]),
            failures: Vec::new(),
        };

        assert_eq!(report.summary(), "2 tasks were re-scheduled to run daily");
        assert_eq!(
            report.audit_line(),
            "Re-configure scheduled tasks daily: scan,report"
        );
    }
}
