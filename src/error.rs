//! Error taxonomy for settings mutations.
//!
//! # Design Decisions
//! - Every rejection is recoverable: the engine returns it to the
//!   caller and performs no store write for that action
//! - Scheduler failures are scoped to one task and never abort the
//!   rest of a batch
//! - Nothing in this crate is fatal to the host process

use thiserror::Error;

/// Reasons the self-hosted exporter path can be refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathRejection {
    /// The candidate lives under the web-served document root.
    #[error("file should not be publicly accessible")]
    PubliclyAccessible,

    /// The candidate already exists and will not be overwritten.
    #[error("file already exists and will not be overwritten")]
    AlreadyExists,

    /// The candidate's parent directory is missing or not writable.
    #[error("file parent directory is not writable")]
    ParentNotWritable,
}

/// A validation failure for one administrative action.
///
/// The triggering action performed no mutation and must be re-submitted
/// by the administrator; there is no automatic retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The submitted client-IP header is not in the allow-list.
    #[error("unknown address header: {0}")]
    UnknownHeader(String),

    /// The schedule action token is neither a registered frequency nor
    /// one of the fixed pseudo-actions.
    #[error("unknown schedule action: {0}")]
    UnknownAction(String),

    /// A schedule mutation was submitted with an empty task list.
    #[error("no scheduled tasks were selected from the list")]
    NoTasksSelected,

    /// A destructive operation was submitted without its explicit
    /// confirmation flag.
    #[error("you need to confirm that you understand the risk of this operation")]
    ConfirmationRequired,

    /// The import payload is not a flat JSON object of strings.
    #[error("data is incorrectly encoded")]
    MalformedDocument,

    /// A field value failed its shape check.
    #[error("invalid value for {field}: {value:?}")]
    InvalidValue {
        /// Name of the submitted field.
        field: &'static str,
        /// Raw value as submitted.
        value: String,
    },

    /// The exporter path failed validation.
    #[error(transparent)]
    Path(#[from] PathRejection),

    /// Creating the accepted exporter file failed.
    #[error("could not create exporter file: {0}")]
    ExporterFile(String),
}

/// One task the external scheduler refused to mutate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("scheduler rejected {task}: {reason}")]
pub struct SchedulerFailure {
    /// Hook name of the task.
    pub task: String,
    /// Scheduler-provided reason.
    pub reason: String,
}
