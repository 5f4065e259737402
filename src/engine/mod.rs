//! Settings mutation orchestration.
//!
//! # Data Flow
//! ```text
//! submitted form
//!     → form.rs (read-only parameter access)
//!     → actions.rs (shape checks, dispatch)
//!     → SettingsEngine::apply
//!         → sub-validator (trust / selfhost / schedule / transfer)
//!         → option store write (only after full validation)
//!         → audit report for the applied mutation
//! ```
//!
//! # Design Decisions
//! - An unauthenticated action is a no-op read, not an error
//! - Rejections never reach the store or the audit sink
//! - The trust header pair is written through one private function so
//!   no caller can set one half alone
//! - No automatic retries; every failure is terminal for the request

pub mod actions;
pub mod form;

pub use actions::{parse_actions, SettingsAction, Toggle};
pub use form::FormData;

use std::path::PathBuf;

use crate::audit::{AuditSink, EventType, Severity};
use crate::error::Rejection;
use crate::keys;
use crate::schedule::{MutationReport, ScheduleMutator, TaskScheduler};
use crate::selfhost::{self, ExportPathUpdate};
use crate::store::OptionStore;
use crate::transfer::{self, ImportDocument, ImportReport};
use crate::trust::{self, TrustHeaderSetting};

/// External CSRF/nonce check, consumed once per inbound action.
pub trait NonceVerifier {
    /// True when the current action carries a valid nonce.
    fn is_authenticated_action(&self) -> bool;
}

/// Verifier for contexts where the action was already authenticated
/// out of band (the CLI, trusted internal callers).
#[derive(Debug, Clone, Copy, Default)]
pub struct PreverifiedAction;

impl NonceVerifier for PreverifiedAction {
    fn is_authenticated_action(&self) -> bool {
        true
    }
}

/// Result of one administrative action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The action was not authenticated; nothing was read or written.
    Ignored,
    /// The mutation was applied; the message matches the audit event.
    Applied(String),
    /// A bulk import ran; skipped entries are normal, not failures.
    Imported(ImportReport),
    /// A schedule batch ran, possibly with per-task failures.
    Scheduled(MutationReport),
}

/// Orchestrates validation, store writes and audit reporting for every
/// administrative settings mutation.
///
/// All collaborators are injected, so the engine runs without a host
/// platform in tests.
#[derive(Debug)]
pub struct SettingsEngine<S, T, A, N> {
    store: S,
    scheduler: T,
    audit: A,
    nonce: N,
    document_root: PathBuf,
}

impl<S, T, A, N> SettingsEngine<S, T, A, N>
where
    S: OptionStore,
    T: TaskScheduler,
    A: AuditSink,
    N: NonceVerifier,
{
    pub fn new(
        store: S,
        scheduler: T,
        audit: A,
        nonce: N,
        document_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store,
            scheduler,
            audit,
            nonce,
            document_root: document_root.into(),
        }
    }

    /// Read access to the injected option store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read access to the injected scheduler.
    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    /// Read access to the injected audit sink.
    pub fn audit(&self) -> &A {
        &self.audit
    }

    /// Serialize the allow-listed settings subset. Read-only, so no
    /// nonce is required.
    pub fn export(&self) -> ImportDocument {
        transfer::export(&self.store)
    }

    /// Apply every recognized action in the submitted form, in page
    /// order.
    pub fn process(&mut self, form: &FormData) -> Vec<Result<Outcome, Rejection>> {
        parse_actions(form)
            .into_iter()
            .map(|action| self.apply(action))
            .collect()
    }

    /// Validate and apply one administrative action.
    pub fn apply(&mut self, action: SettingsAction) -> Result<Outcome, Rejection> {
        if !self.nonce.is_authenticated_action() {
            return Ok(Outcome::Ignored);
        }

        match action {
            SettingsAction::ReverseProxy(toggle) => self.apply_reverse_proxy(toggle),
            SettingsAction::AddressHeader(header) => self.apply_address_header(&header),
            SettingsAction::DnsLookups(toggle) => self.apply_option_toggle(
                keys::DNS_LOOKUPS,
                "DNS lookups for reverse proxy detection",
                toggle,
            ),
            SettingsAction::CommentMonitor(toggle) => {
                self.apply_option_toggle(keys::COMMENT_MONITOR, "Comment monitor", toggle)
            }
            SettingsAction::AuditLogLimit(raw) => self.apply_report_limit(&raw),
            SettingsAction::SelfHostingPath(raw) => self.apply_selfhosting_path(&raw),
            SettingsAction::Schedule { action, tasks } => self.apply_schedule(&action, &tasks),
            SettingsAction::Import {
                document,
                confirmed,
            } => self.apply_import(&document, confirmed),
            SettingsAction::ResetOptions { confirmed } => self.apply_reset(confirmed),
        }
    }

    /// Write both halves of the trust pair together; the only path in
    /// this crate that touches either option.
    fn write_trust_setting(&mut self, setting: &TrustHeaderSetting) {
        self.store.set(keys::ADDR_HEADER, &setting.header);
        self.store.set(
            keys::REVPROXY,
            if setting.reverse_proxy {
                "enabled"
            } else {
                "disabled"
            },
        );
    }

    fn apply_reverse_proxy(&mut self, toggle: Toggle) -> Result<Outcome, Rejection> {
        let setting = trust::apply_reverse_proxy_toggle(toggle.is_enable());
        self.write_trust_setting(&setting);
        self.applied(
            Severity::Info,
            format!("Reverse proxy support was {}", toggle.stored()),
        )
    }

    fn apply_address_header(&mut self, header: &str) -> Result<Outcome, Rejection> {
        let setting = trust::apply_explicit_header(header)?;
        self.write_trust_setting(&setting);
        self.applied(
            Severity::Info,
            format!(
                "HTTP header for client IP retrieval was set to {}",
                setting.header
            ),
        )
    }

    fn apply_option_toggle(
        &mut self,
        key: &str,
        label: &str,
        toggle: Toggle,
    ) -> Result<Outcome, Rejection> {
        self.store.set(key, toggle.stored());
        self.applied(Severity::Info, format!("{} was {}", label, toggle.stored()))
    }

    fn apply_report_limit(&mut self, raw: &str) -> Result<Outcome, Rejection> {
        if !actions::is_report_limit(raw) {
            return Err(Rejection::InvalidValue {
                field: keys::LOGS4REPORT,
                value: raw.to_string(),
            });
        }

        self.store.set(keys::LOGS4REPORT, raw);
        self.applied(
            Severity::Info,
            format!("Audit log statistics limit set to {}", raw),
        )
    }

    fn apply_selfhosting_path(&mut self, raw: &str) -> Result<Outcome, Rejection> {
        match ExportPathUpdate::parse(raw) {
            ExportPathUpdate::Disable => {
                self.store.delete(keys::SELFHOSTING_FPATH);
                self.store.set(keys::SELFHOSTING_MONITOR, "disabled");
                self.applied(Severity::Info, "Log exporter was disabled".to_string())
            }
            ExportPathUpdate::Enable(path) => {
                let accepted = selfhost::validate_export_path(&path, &self.document_root)?;
                accepted
                    .create_empty()
                    .map_err(|e| Rejection::ExporterFile(e.to_string()))?;

                self.store.set(keys::SELFHOSTING_MONITOR, "enabled");
                self.store.set(keys::SELFHOSTING_FPATH, raw);
                self.applied(
                    Severity::Info,
                    "Log exporter file path was set correctly".to_string(),
                )
            }
        }
    }

    fn apply_schedule(&mut self, token: &str, tasks: &[String]) -> Result<Outcome, Rejection> {
        let report = ScheduleMutator::new(&mut self.scheduler).apply(token, tasks)?;
        self.audit.report(Severity::Notice, &report.audit_line());
        Ok(Outcome::Scheduled(report))
    }

    fn apply_import(&mut self, document: &str, confirmed: bool) -> Result<Outcome, Rejection> {
        let report = transfer::import(&mut self.store, document, confirmed)?;
        self.audit.report(Severity::Info, &report.summary());
        Ok(Outcome::Imported(report))
    }

    fn apply_reset(&mut self, confirmed: bool) -> Result<Outcome, Rejection> {
        if !confirmed {
            return Err(Rejection::ConfirmationRequired);
        }

        for key in keys::all_keys() {
            self.store.delete(key);
        }

        let message = "Local security logs, hardening and settings were deleted".to_string();
        self.audit.report(Severity::Critical, &message);
        self.audit.notify(EventType::PluginChange, &message);
        Ok(Outcome::Applied(message))
    }

    /// Report the applied mutation once and notify the administrator,
    /// then wrap the message into the outcome.
    fn applied(&mut self, severity: Severity, message: String) -> Result<Outcome, Rejection> {
        self.audit.report(severity, &message);
        self.audit.notify(EventType::PluginChange, &message);
        Ok(Outcome::Applied(message))
    }
}
