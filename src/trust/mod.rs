//! Client-IP trust configuration.
//!
//! # Data Flow
//! ```text
//! submitted toggle or header choice
//!     → policy.rs (allow-list check, pair derivation)
//!     → TrustHeaderSetting (header + reverse-proxy flag)
//!     → engine writes both halves to the store together
//! ```
//!
//! # Design Decisions
//! - The header and the reverse-proxy flag are one value; no API in
//!   this crate ever yields half of the pair
//! - Header names outside the allow-list are rejected, never applied

pub mod policy;

pub use policy::{
    apply_explicit_header, apply_reverse_proxy_toggle, TrustHeaderSetting, ALLOWED_HEADERS,
    DIRECT_HEADER, PROXY_HEADER,
};
