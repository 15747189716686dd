// ============================
// crates/backend-lib/src/lib.rs
// ============================
//! Core backend-lib functionality for the Phenotype Portal web front-end:
//! credential verification, session issuance, protected-route enforcement
//! and the HTML/JSON handlers wired together by [`router::create_router`].

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod router;
pub mod views;

use std::sync::Arc;
use std::time::Duration;

use crate::auth::{
    AuthRateLimiter, AuthService, CredentialVerifier, DefaultAuth, FixedPasswordVerifier,
    SessionManager,
};
use crate::config::Settings;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Authentication service (credential verification + session issuance)
    pub auth: Arc<dyn AuthService>,
    /// Session manager (reader side, used by the route guard)
    pub sessions: Arc<SessionManager>,
    /// Settings manager
    pub settings: Arc<Settings>,
    /// Per-IP lockout for failed login attempts
    pub login_limiter: Arc<AuthRateLimiter>,
}

impl AppState {
    /// Create a new application state with the shipped fixed-password verifier.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        let verifier = Arc::new(FixedPasswordVerifier::new(settings.accepted_password.clone()));
        Self::with_verifier(settings, verifier)
    }

    /// Create application state with a caller-supplied credential verifier.
    ///
    /// This is the substitution seam: a store-backed verifier can replace
    /// the fixed-password placeholder without touching any handler.
    #[must_use]
    pub fn with_verifier(settings: Settings, verifier: Arc<dyn CredentialVerifier>) -> Self {
        let sessions = Arc::new(SessionManager::new(Duration::from_secs(
            settings.session_ttl_secs,
        )));
        let auth = Arc::new(DefaultAuth::new(verifier, Arc::clone(&sessions)));
        let login_limiter = Arc::new(AuthRateLimiter::new(
            settings.rate_limit.max_attempts,
            Duration::from_secs(settings.rate_limit.lockout_secs),
        ));

        Self {
            auth,
            sessions,
            settings: Arc::new(settings),
            login_limiter,
        }
    }
}
