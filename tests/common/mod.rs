//! Shared test doubles for the engine integration tests.

use sentinel_settings::audit::{AuditSink, EventType, Severity};
use sentinel_settings::error::SchedulerFailure;
use sentinel_settings::schedule::{InMemoryScheduler, ScheduleTable, TaskScheduler};

/// Audit sink that records every event for later assertions.
#[derive(Debug, Default)]
pub struct RecordingAudit {
    pub reports: Vec<(Severity, String)>,
    pub notifications: Vec<(EventType, String)>,
}

impl AuditSink for RecordingAudit {
    fn report(&mut self, severity: Severity, message: &str) {
        self.reports.push((severity, message.to_string()));
    }

    fn notify(&mut self, event: EventType, message: &str) {
        self.notifications.push((event, message.to_string()));
    }
}

/// Scheduler that refuses mutations for selected task names and
/// otherwise behaves like the in-memory scheduler.
#[derive(Debug, Default)]
pub struct RejectingScheduler {
    pub inner: InMemoryScheduler,
    pub reject: Vec<String>,
}

impl RejectingScheduler {
    pub fn rejecting(names: &[&str]) -> Self {
        Self {
            inner: InMemoryScheduler::new(),
            reject: names.iter().map(|n| (*n).to_string()).collect(),
        }
    }

    fn check(&self, task: &str) -> Result<(), SchedulerFailure> {
        if self.reject.iter().any(|t| t == task) {
            Err(SchedulerFailure {
                task: task.to_string(),
                reason: "injected failure".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

impl TaskScheduler for RejectingScheduler {
    fn schedule_once(&mut self, task: &str, at: u64) -> Result<(), SchedulerFailure> {
        self.check(task)?;
        self.inner.schedule_once(task, at)
    }

    fn schedule_recurring(
        &mut self,
        task: &str,
        frequency: &str,
        starting_at: u64,
    ) -> Result<(), SchedulerFailure> {
        self.check(task)?;
        self.inner.schedule_recurring(task, frequency, starting_at)
    }

    fn clear(&mut self, task: &str) -> Result<(), SchedulerFailure> {
        self.check(task)?;
        self.inner.clear(task)
    }

    fn next_run_time(&self, task: &str) -> Option<u64> {
        self.inner.next_run_time(task)
    }

    fn list_all(&self) -> ScheduleTable {
        self.inner.list_all()
    }

    fn frequencies(&self) -> Vec<String> {
        self.inner.frequencies()
    }
}
