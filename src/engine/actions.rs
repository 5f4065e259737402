//! Administrative actions and form dispatch.

use super::form::FormData;

/// Two-state switch submitted as `"enable"` or `"disable"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Enable,
    Disable,
}

impl Toggle {
    /// Parse the submitted switch value.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "enable" => Some(Self::Enable),
            "disable" => Some(Self::Disable),
            _ => None,
        }
    }

    pub fn is_enable(self) -> bool {
        matches!(self, Self::Enable)
    }

    /// Past-tense form stored in the option store and used in audit
    /// messages (`enabled` / `disabled`).
    pub fn stored(self) -> &'static str {
        match self {
            Self::Enable => "enabled",
            Self::Disable => "disabled",
        }
    }
}

/// One shape-checked administrative action ready for the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsAction {
    /// Switch reverse proxy support on or off.
    ReverseProxy(Toggle),
    /// Pick the trusted client-IP header explicitly.
    AddressHeader(String),
    /// Toggle DNS lookups during proxy detection.
    DnsLookups(Toggle),
    /// Toggle the comment monitor.
    CommentMonitor(Toggle),
    /// Change the audit log report limit (raw digits, one to four).
    AuditLogLimit(String),
    /// Change or disable the self-hosted exporter path.
    SelfHostingPath(String),
    /// Mutate a batch of scheduled tasks.
    Schedule {
        /// Raw action token (frequency, `runnow` or `remove`).
        action: String,
        /// Hook names of the selected tasks.
        tasks: Vec<String>,
    },
    /// Bulk-import a settings document.
    Import {
        /// Raw JSON document as submitted.
        document: String,
        /// Explicit confirmation flag, distinct from CSRF.
        confirmed: bool,
    },
    /// Delete every allow-listed option.
    ResetOptions { confirmed: bool },
}

/// Form parameter names, matching the settings pages that submit them.
mod param {
    pub const REVPROXY: &str = "revproxy";
    pub const ADDR_HEADER: &str = "addr_header";
    pub const DNS_LOOKUPS: &str = "dns_lookups";
    pub const COMMENT_MONITOR: &str = "comment_monitor";
    pub const LOGS4REPORT: &str = "logs4report";
    pub const SELFHOSTING_FPATH: &str = "selfhosting_fpath";
    pub const CRONJOB_ACTION: &str = "cronjob_action";
    pub const CRONJOBS: &str = "cronjobs";
    pub const IMPORT: &str = "import";
    pub const SETTINGS: &str = "settings";
    pub const RESET_OPTIONS: &str = "reset_options";
    pub const PROCESS_FORM: &str = "process_form";
}

/// Collect every recognized action from a submitted form, in page
/// order.
///
/// Values that fail their shape check here (a toggle that is neither
/// `enable` nor `disable`, a non-numeric report limit) are dropped
/// without producing an action, matching the pattern checks the
/// request accessor applies.
pub fn parse_actions(form: &FormData) -> Vec<SettingsAction> {
    let mut actions = Vec::new();

    if let Some(toggle) = form.get(param::REVPROXY).and_then(Toggle::parse) {
        actions.push(SettingsAction::ReverseProxy(toggle));
    }

    if let Some(toggle) = form.get(param::DNS_LOOKUPS).and_then(Toggle::parse) {
        actions.push(SettingsAction::DnsLookups(toggle));
    }

    if let Some(header) = form.get(param::ADDR_HEADER) {
        if !header.is_empty() {
            actions.push(SettingsAction::AddressHeader(header.to_string()));
        }
    }

    if let Some(toggle) = form.get(param::COMMENT_MONITOR).and_then(Toggle::parse) {
        actions.push(SettingsAction::CommentMonitor(toggle));
    }

    if let Some(limit) = form.get(param::LOGS4REPORT) {
        if is_report_limit(limit) {
            actions.push(SettingsAction::AuditLogLimit(limit.to_string()));
        }
    }

    if let Some(path) = form.get(param::SELFHOSTING_FPATH) {
        actions.push(SettingsAction::SelfHostingPath(path.to_string()));
    }

    if let Some(action) = form.get(param::CRONJOB_ACTION) {
        actions.push(SettingsAction::Schedule {
            action: action.to_string(),
            tasks: form.get_all(param::CRONJOBS).to_vec(),
        });
    }

    if form.contains(param::IMPORT) {
        actions.push(SettingsAction::Import {
            document: form.get(param::SETTINGS).unwrap_or_default().to_string(),
            confirmed: confirmed(form),
        });
    }

    if form.contains(param::RESET_OPTIONS) {
        actions.push(SettingsAction::ResetOptions {
            confirmed: confirmed(form),
        });
    }

    actions
}

fn confirmed(form: &FormData) -> bool {
    form.get(param::PROCESS_FORM) == Some("1")
}

/// Shape check for the audit log report limit: one to four digits.
pub(crate) fn is_report_limit(raw: &str) -> bool {
    !raw.is_empty() && raw.len() <= 4 && raw.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_parse() {
        assert_eq!(Toggle::parse("enable"), Some(Toggle::Enable));
        assert_eq!(Toggle::parse("disable"), Some(Toggle::Disable));
        assert_eq!(Toggle::parse("enabled"), None);
        assert_eq!(Toggle::parse(""), None);
        assert_eq!(Toggle::Enable.stored(), "enabled");
    }

    #[test]
    fn test_report_limit_shape() {
        assert!(is_report_limit("0"));
        assert!(is_report_limit("9999"));
        assert!(!is_report_limit(""));
        assert!(!is_report_limit("12345"));
        assert!(!is_report_limit("12a"));
        assert!(!is_report_limit("-1"));
    }

    #[test]
    fn test_parse_actions_in_page_order() {
        let mut form = FormData::new();
        form.push("revproxy", "enable");
        form.push("dns_lookups", "disable");
        form.push("cronjob_action", "daily");
        form.push("cronjobs", "scan");
        form.push("cronjobs", "report");

        let actions = parse_actions(&form);

        assert_eq!(
            actions,
            vec![
                SettingsAction::ReverseProxy(Toggle::Enable),
                SettingsAction::DnsLookups(Toggle::Disable),
                SettingsAction::Schedule {
                    action: "daily".to_string(),
                    tasks: vec!["scan".to_string(), "report".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_malformed_toggles_are_dropped() {
        let mut form = FormData::new();
        form.push("revproxy", "yes");
        form.push("logs4report", "many");

        assert!(parse_actions(&form).is_empty());
    }

    #[test]
    fn test_import_reads_confirmation_flag() {
        let mut form = FormData::new();
        form.push("import", "");
        form.push("settings", "{}");

        assert_eq!(
            parse_actions(&form),
            vec![SettingsAction::Import {
                document: "{}".to_string(),
                confirmed: false,
            }]
        );

        form.push("process_form", "1");
        assert_eq!(
            parse_actions(&form),
            vec![SettingsAction::Import {
                document: "{}".to_string(),
                confirmed: true,
            }]
        );
    }
}
