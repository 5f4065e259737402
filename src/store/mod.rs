//! Option storage.
//!
//! # Data Flow
//! ```text
//! engine mutation
//!     → OptionStore::set / delete (only after full validation)
//!
//! Implementations:
//!     memory.rs — ephemeral map, tests and embedding
//!     file.rs   — flat JSON document on disk, used by the CLI
//! ```
//!
//! # Design Decisions
//! - The store is injected into the engine, never reached ambiently
//! - Implementations own their write serialization; the engine assumes
//!   last-write-wins and no cross-key transactions

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Durable key/value storage for plugin options.
pub trait OptionStore {
    /// Current value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Set `key` to `value`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);

    /// Remove `key` if present.
    fn delete(&mut self, key: &str);

    /// True when the stored toggle for `key` is `"enabled"`.
    fn is_enabled(&self, key: &str) -> bool {
        self.get(key).as_deref() == Some("enabled")
    }
}
