//! Trust header selection rules.

use crate::error::Rejection;

/// Header trusted when reverse proxy support is switched on.
pub const PROXY_HEADER: &str = "HTTP_X_SENTINEL_CLIENTIP";

/// Header meaning "trust the raw connection address".
pub const DIRECT_HEADER: &str = "REMOTE_ADDR";

/// Headers an administrator may pick as the client-IP source.
pub const ALLOWED_HEADERS: &[&str] = &[
    DIRECT_HEADER,
    PROXY_HEADER,
    "HTTP_CF_CONNECTING_IP",
    "HTTP_X_REAL_IP",
    "HTTP_CLIENT_IP",
    "HTTP_X_FORWARDED_FOR",
    "HTTP_X_FORWARDED",
    "HTTP_FORWARDED_FOR",
    "HTTP_FORWARDED",
    "HTTP_X_CLUSTER_CLIENT_IP",
];

/// The header/flag pair governing client-IP extraction.
///
/// Invariant: `header == REMOTE_ADDR` if and only if `reverse_proxy`
/// is false. A stale half would let a client-supplied header be
/// trusted while the system still behaves as if no proxy exists, so
/// callers must always write both to the store together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustHeaderSetting {
    /// HTTP header read for the client address.
    pub header: String,
    /// Whether a reverse proxy is assumed in front of the site.
    pub reverse_proxy: bool,
}

impl TrustHeaderSetting {
    fn direct() -> Self {
        Self {
            header: DIRECT_HEADER.to_string(),
            reverse_proxy: false,
        }
    }

    fn proxied(header: &str) -> Self {
        Self {
            header: header.to_string(),
            reverse_proxy: true,
        }
    }
}

/// Pair update for the reverse-proxy on/off switch.
///
/// Enabling selects the fixed internal proxy header; disabling falls
/// back to the raw connection address.
pub fn apply_reverse_proxy_toggle(enable: bool) -> TrustHeaderSetting {
    if enable {
        TrustHeaderSetting::proxied(PROXY_HEADER)
    } else {
        TrustHeaderSetting::direct()
    }
}

/// Pair update for an explicitly chosen header.
///
/// Picking `REMOTE_ADDR` simultaneously disables the reverse-proxy
/// flag; any other allow-listed header enables it.
pub fn apply_explicit_header(header: &str) -> Result<TrustHeaderSetting, Rejection> {
    if !ALLOWED_HEADERS.contains(&header) {
        return Err(Rejection::UnknownHeader(header.to_string()));
    }

    if header == DIRECT_HEADER {
        Ok(TrustHeaderSetting::direct())
    } else {
        Ok(TrustHeaderSetting::proxied(header))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_enable_uses_proxy_header() {
        let setting = apply_reverse_proxy_toggle(true);
        assert_eq!(setting.header, PROXY_HEADER);
        assert!(setting.reverse_proxy);
    }

    #[test]
    fn test_toggle_disable_uses_remote_addr() {
        let setting = apply_reverse_proxy_toggle(false);
        assert_eq!(setting.header, DIRECT_HEADER);
        assert!(!setting.reverse_proxy);
    }

    #[test]
    fn test_explicit_remote_addr_disables_proxy() {
        let setting = apply_explicit_header("REMOTE_ADDR").unwrap();
        assert_eq!(setting.header, "REMOTE_ADDR");
        assert!(!setting.reverse_proxy);
    }

    #[test]
    fn test_explicit_proxy_header_enables_proxy() {
        let setting = apply_explicit_header("HTTP_CF_CONNECTING_IP").unwrap();
        assert_eq!(setting.header, "HTTP_CF_CONNECTING_IP");
        assert!(setting.reverse_proxy);
    }

    #[test]
    fn test_unknown_header_is_rejected() {
        let err = apply_explicit_header("HTTP_X_EVIL").unwrap_err();
        assert_eq!(err, Rejection::UnknownHeader("HTTP_X_EVIL".to_string()));
    }

    #[test]
    fn test_pair_invariant_holds_for_every_allowed_header() {
        for header in ALLOWED_HEADERS {
            let setting = apply_explicit_header(header).unwrap();
            assert_eq!(setting.header == DIRECT_HEADER, !setting.reverse_proxy);
        }
    }
}
