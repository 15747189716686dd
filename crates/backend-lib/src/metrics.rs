// ==============
// crates/backend-lib/src/metrics.rs

//! Central place for Prometheus metric keys
pub const LOGIN_SUCCEEDED: &str = "login.succeeded";
pub const LOGIN_REJECTED: &str = "login.rejected";
pub const LOGIN_RATE_LIMITED: &str = "login.rate_limited";
pub const SESSION_ISSUED: &str = "session.issued";
pub const SESSION_EXPIRED: &str = "session.expired";
pub const SESSIONS_ACTIVE: &str = "session.active";
