//! In-memory option store.

use std::collections::BTreeMap;

use super::OptionStore;

/// Option store keeping everything in a process-local map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored options.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no options are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl OptionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn delete(&mut self, key: &str) {
        self.values.remove(key);
    }
}
