//! Self-hosted event exporter path rules.
//!
//! # Responsibilities
//! - Interpret the submitted path (empty means "disable the feature")
//! - Vet candidate paths against traversal and exposure rules
//! - Create the accepted file empty, exactly once
//!
//! # Design Decisions
//! - Rules run in a fixed order; the first failure names the rejection
//! - An existing file is never overwritten, which also closes the
//!   symlink-replacement window
//! - A rejection is terminal for the request and surfaced verbatim

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::PathRejection;

/// Outcome of parsing the submitted exporter path field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportPathUpdate {
    /// Empty submission: switch the exporter off.
    Disable,
    /// Non-empty submission, still subject to [`validate_export_path`].
    Enable(PathBuf),
}

impl ExportPathUpdate {
    /// Interpret the raw submitted value.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            Self::Disable
        } else {
            Self::Enable(PathBuf::from(raw))
        }
    }
}

/// A path that passed every exporter rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedPath(PathBuf);

impl AcceptedPath {
    /// Create the empty exporter file at the accepted location.
    ///
    /// Uses `create_new` so the call fails instead of truncating a
    /// file that appeared between validation and creation.
    pub fn create_empty(&self) -> io::Result<()> {
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.0)
            .map(|_| ())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

/// Validate a candidate exporter path.
///
/// Rules, in order: the candidate must not live under the web-served
/// `document_root`, must not already exist, and its parent directory
/// must exist and be writable.
pub fn validate_export_path(
    candidate: &Path,
    document_root: &Path,
) -> Result<AcceptedPath, PathRejection> {
    if candidate.starts_with(document_root) {
        return Err(PathRejection::PubliclyAccessible);
    }

    if candidate.exists() {
        return Err(PathRejection::AlreadyExists);
    }

    match candidate.parent().and_then(|p| fs::metadata(p).ok()) {
        Some(meta) if meta.is_dir() && !meta.permissions().readonly() => {
            Ok(AcceptedPath(candidate.to_path_buf()))
        }
        _ => Err(PathRejection::ParentNotWritable),
    }
}
