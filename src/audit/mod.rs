//! Audit events and administrator notifications.
//!
//! # Responsibilities
//! - Define the severity and event-type vocabulary for mutations
//! - Expose the sink trait the engine reports through
//!
//! # Design Decisions
//! - The sink is injected; the engine never logs store contents itself
//! - Exactly one report per applied mutation, none for rejections

use std::fmt;

/// Log severity for audit events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Routine configuration change.
    Info,
    /// Operational change worth flagging (schedule mutations).
    Notice,
    /// Destructive or security-sensitive change.
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Info => "info",
            Severity::Notice => "notice",
            Severity::Critical => "critical",
        };
        f.write_str(label)
    }
}

/// Machine-readable type attached to administrator notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    /// A plugin setting changed.
    PluginChange,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::PluginChange => f.write_str("plugin_change"),
        }
    }
}

/// Sink for audit events and notifications.
pub trait AuditSink {
    /// Record one audit event.
    fn report(&mut self, severity: Severity, message: &str);

    /// Emit one administrator notification.
    fn notify(&mut self, event: EventType, message: &str);
}

/// Audit sink that forwards to the `tracing` macros.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAudit;

impl AuditSink for TracingAudit {
    fn report(&mut self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => tracing::info!(target: "audit", "{}", message),
            Severity::Notice => tracing::warn!(target: "audit", "{}", message),
            Severity::Critical => tracing::error!(target: "audit", "{}", message),
        }
    }

    fn notify(&mut self, event: EventType, message: &str) {
        tracing::info!(target: "audit", event = %event, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_labels() {
        assert_eq!(Severity::Info.to_string(), "info");
        assert_eq!(Severity::Notice.to_string(), "notice");
        assert_eq!(Severity::Critical.to_string(), "critical");
        assert_eq!(EventType::PluginChange.to_string(), "plugin_change");
    }
}
