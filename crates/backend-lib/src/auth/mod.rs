// ============================
// crates/backend-lib/src/auth/mod.rs
// ============================
//! Authentication module.

pub mod cookie;
pub mod rate_limit;
pub mod session;
pub mod token;
pub mod verifier;
mod service;
mod service_impl;

pub use cookie::{clear_session_cookie, extract_session_token, session_cookie, SESSION_COOKIE_NAME};
pub use rate_limit::AuthRateLimiter;
pub use service::AuthService;
pub use service_impl::DefaultAuth;
pub use session::{Session, SessionManager};
pub use token::generate_secure_token;
pub use verifier::{AuthOutcome, CredentialVerifier, Credentials, FixedPasswordVerifier};
