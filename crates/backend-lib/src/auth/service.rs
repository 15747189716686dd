use async_trait::async_trait;
use phenotype_common::Principal;

use super::{Credentials, Session};
use crate::error::AppError;

/// Login, session lookup and logout behind one seam.
///
/// Handlers depend on this trait only, so both the credential verifier and
/// the session store can be swapped without touching them.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify credentials and issue a session on success.
    async fn login(&self, credentials: Credentials) -> Result<Session, AppError>;
    /// Resolve a presented token into the current principal, if any.
    async fn session(&self, token: &str) -> Option<Principal>;
    /// Revoke a session token. Returns whether a live session was removed.
    async fn logout(&self, token: &str) -> bool;
}
