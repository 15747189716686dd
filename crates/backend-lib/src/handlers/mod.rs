// ============================
// crates/backend-lib/src/handlers/mod.rs
// ============================
//! HTTP handlers: auth endpoints, HTML pages and health.

pub mod health;
pub mod login;
pub mod logout;
pub mod pages;
pub mod session;

// common functions for the handlers
use axum::http::HeaderMap;
use std::net::{IpAddr, Ipv4Addr};

/// Client address as reported by the reverse proxy.
///
/// Falls back to the unspecified address when the header is absent or
/// malformed, so direct (unproxied) clients share one lockout bucket.
pub(crate) fn client_ip(headers: &HeaderMap) -> IpAddr {
    headers
        .get("x-real-ip")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}
