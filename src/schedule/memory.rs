//! In-memory scheduler used by tests and the CLI.

use std::collections::BTreeMap;

use crate::error::SchedulerFailure;

use super::{ScheduleTable, ScheduledEvent, TaskScheduler};

/// Built-in recurrence tokens and their intervals in seconds.
const BUILTIN_FREQUENCIES: &[(&str, u64)] = &[
    ("hourly", 3_600),
    ("twicedaily", 43_200),
    ("daily", 86_400),
];

/// Scheduler keeping its task table in process memory.
#[derive(Debug, Clone)]
pub struct InMemoryScheduler {
    events: ScheduleTable,
    frequencies: Vec<String>,
}

impl Default for InMemoryScheduler {
    fn default() -> Self {
        Self {
            events: BTreeMap::new(),
            frequencies: BUILTIN_FREQUENCIES
                .iter()
                .map(|(name, _)| (*name).to_string())
                .collect(),
        }
    }
}

impl InMemoryScheduler {
    /// Scheduler with the built-in frequencies registered.
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, at: u64, task: &str, event: ScheduledEvent) {
        self.events
            .entry(at)
            .or_default()
            .entry(task.to_string())
            .or_default()
            .push(event);
    }
}

impl TaskScheduler for InMemoryScheduler {
    fn schedule_once(&mut self, task: &str, at: u64) -> Result<(), SchedulerFailure> {
        self.insert(
            at,
            task,
            ScheduledEvent {
                schedule: None,
                args: Vec::new(),
            },
        );
        Ok(())
    }

    fn schedule_recurring(
        &mut self,
        task: &str,
        frequency: &str,
        starting_at: u64,
    ) -> Result<(), SchedulerFailure> {
        if !self.frequencies.iter().any(|f| f == frequency) {
            return Err(SchedulerFailure {
                task: task.to_string(),
                reason: format!("unknown frequency {:?}", frequency),
            });
        }

        self.insert(
            starting_at,
            task,
            ScheduledEvent {
                schedule: Some(frequency.to_string()),
                args: Vec::new(),
            },
        );
        Ok(())
    }

    fn clear(&mut self, task: &str) -> Result<(), SchedulerFailure> {
        for hooks in self.events.values_mut() {
            hooks.remove(task);
        }
        self.events.retain(|_, hooks| !hooks.is_empty());
        Ok(())
    }

    fn next_run_time(&self, task: &str) -> Option<u64> {
        self.events
            .iter()
            .find(|(_, hooks)| hooks.contains_key(task))
            .map(|(at, _)| *at)
    }

    fn list_all(&self) -> ScheduleTable {
        self.events.clone()
    }

    fn frequencies(&self) -> Vec<String> {
        self.frequencies.clone()
    }
}
