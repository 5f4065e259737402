//! Bulk settings import and export.
//!
//! # Data Flow
//! ```text
//! export: registry order → store reads → flat JSON object
//! import: raw JSON → confirmation guard → parse → per-entry filter
//!         (prefix strip, allow-list) → store writes → ImportReport
//! ```
//!
//! # Design Decisions
//! - Export omits missing keys; it never invents defaults
//! - Import silently skips entries outside the allow-list so a
//!   document with unknown keys partially succeeds instead of failing
//! - Skipped entries are deliberately not distinguished in the counts
//! - The confirmation flag is independent of CSRF protection

use std::collections::BTreeMap;

use crate::error::Rejection;
use crate::keys;
use crate::store::OptionStore;

/// Transport shape of a settings backup: a flat JSON object whose keys
/// carry the option namespace prefix (`sentinel_addr_header`, ...).
pub type ImportDocument = BTreeMap<String, String>;

/// Counters for one import request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    /// Entries actually written to the store.
    pub imported: usize,
    /// Entries present in the submitted document.
    pub total: usize,
}

impl ImportReport {
    /// Administrator-facing summary.
    pub fn summary(&self) -> String {
        format!("{} out of {} options were imported", self.imported, self.total)
    }
}

/// Serialize the allow-listed subset of the store.
pub fn export<S: OptionStore>(store: &S) -> ImportDocument {
    let mut document = ImportDocument::new();
    for key in keys::all_keys() {
        if let Some(value) = store.get(key) {
            document.insert(keys::external_name(key), value);
        }
    }
    document
}

/// Parse and apply an administrator-supplied settings document.
///
/// Entries whose name is no longer than the namespace prefix, or whose
/// de-prefixed key is outside the allow-list, are skipped and counted
/// only in `total`.
pub fn import<S: OptionStore>(
    store: &mut S,
    raw: &str,
    confirmed: bool,
) -> Result<ImportReport, Rejection> {
    if !confirmed {
        return Err(Rejection::ConfirmationRequired);
    }

    let document: ImportDocument =
        serde_json::from_str(raw).map_err(|_| Rejection::MalformedDocument)?;

    let total = document.len();
    let mut imported = 0;
    let prefix_len = keys::OPTION_PREFIX.len();

    for (name, value) in &document {
        if name.len() <= prefix_len {
            continue;
        }

        let key = match name.get(prefix_len..) {
            Some(key) => key,
            None => continue,
        };

        if !keys::is_allowed(key) {
            continue;
        }

        store.set(key, value);
        imported += 1;
    }

    Ok(ImportReport { imported, total })
}
