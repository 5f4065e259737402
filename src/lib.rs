//! Security settings mutation engine.
//!
//! Accepts untrusted administrator input and turns it into validated
//! changes to security-relevant configuration: the trusted client-IP
//! header, reverse proxy assumptions, DNS-based proxy detection, the
//! self-hosted event exporter, scheduled security tasks, and bulk
//! import/export of an allow-listed settings subset.
//!
//! # Architecture Overview
//!
//! ```text
//! submitted form (key/value pairs + authenticated flag)
//!     → engine (nonce check, dispatch to the matching validator)
//!         → trust     (client-IP header / reverse-proxy pair)
//!         → selfhost  (exporter path rules)
//!         → schedule  (task batch mutations)
//!         → transfer  (allow-listed import/export)
//!     → store (writes only after full validation)
//!     → audit (one report per applied mutation)
//! ```
//!
//! The option store, task scheduler, audit sink and CSRF verifier are
//! injected collaborators; the crate holds no durable state of its own
//! beyond the static key registry.

pub mod audit;
pub mod engine;
pub mod error;
pub mod keys;
pub mod schedule;
pub mod selfhost;
pub mod store;
pub mod transfer;
pub mod trust;

pub use engine::{FormData, Outcome, SettingsAction, SettingsEngine, Toggle};
pub use error::{PathRejection, Rejection, SchedulerFailure};
