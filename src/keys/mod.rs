//! Allow-listed configuration keys.
//!
//! # Responsibilities
//! - Hold the closed catalogue of keys reachable through bulk import
//! - Expose membership checks and the canonical iteration order
//! - Own the option namespace prefix used in exported documents
//!
//! # Design Decisions
//! - The set is fixed at build time; extending it is a code change,
//!   never a runtime configuration option
//! - Dedicated mutations (trust header, schedules, self-hosting) go
//!   through their own validators and do not consult this list
//! - Keys that could enable code execution or alter authentication
//!   state are deliberately absent

/// Namespace prefix carried by external (exported) option names.
pub const OPTION_PREFIX: &str = "sentinel_";

/// HTTP header trusted for client-IP extraction.
pub const ADDR_HEADER: &str = "addr_header";
/// Whether a reverse proxy is assumed in front of the site.
pub const REVPROXY: &str = "revproxy";
/// Whether proxy detection cross-checks DNS.
pub const DNS_LOOKUPS: &str = "dns_lookups";
/// Whether the comment monitor is active.
pub const COMMENT_MONITOR: &str = "comment_monitor";
/// Row limit for the audit log statistics report.
pub const LOGS4REPORT: &str = "logs4report";
/// Location of the self-hosted event export file.
pub const SELFHOSTING_FPATH: &str = "selfhosting_fpath";
/// Whether the self-hosted event exporter is active.
pub const SELFHOSTING_MONITOR: &str = "selfhosting_monitor";

/// Keys that may be written through bulk import, in export order.
pub const ALLOWED_KEYS: &[&str] = &[
    ADDR_HEADER,
    "api_handler",
    "api_key",
    "api_protocol",
    "api_service",
    COMMENT_MONITOR,
    "diff_utility",
    DNS_LOOKUPS,
    "email_subject",
    "emails_per_hour",
    "firewall_apikey",
    "ignored_events",
    "language",
    "lastlogin_redirection",
    LOGS4REPORT,
    "maximum_failed_logins",
    "notify_available_updates",
    "notify_bruteforce_attack",
    "notify_failed_login",
    "notify_plugin_activated",
    "notify_plugin_change",
    "notify_plugin_deactivated",
    "notify_plugin_deleted",
    "notify_plugin_installed",
    "notify_plugin_updated",
    "notify_post_publication",
    "notify_scan_checksums",
    "notify_settings_updated",
    "notify_success_login",
    "notify_theme_activated",
    "notify_theme_deleted",
    "notify_theme_editor",
    "notify_theme_installed",
    "notify_theme_updated",
    "notify_to",
    "notify_user_registration",
    "notify_website_updated",
    "notify_widget_added",
    "notify_widget_deleted",
    "prettify_mails",
    "request_timeout",
    REVPROXY,
    "scan_frequency",
    SELFHOSTING_FPATH,
    SELFHOSTING_MONITOR,
    "use_platform_mail",
];

/// Returns true if `key` may be mutated through bulk import.
pub fn is_allowed(key: &str) -> bool {
    ALLOWED_KEYS.contains(&key)
}

/// Canonical iteration order for export.
pub fn all_keys() -> impl Iterator<Item = &'static str> {
    ALLOWED_KEYS.iter().copied()
}

/// Prepends the option namespace to a bare key.
pub fn external_name(key: &str) -> String {
    format!("{}{}", OPTION_PREFIX, key)
}
