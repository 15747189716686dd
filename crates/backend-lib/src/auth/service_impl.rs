use async_trait::async_trait;
use metrics::counter;
use phenotype_common::Principal;
use std::sync::Arc;
use tracing::{debug, info};

use super::{AuthOutcome, AuthService, CredentialVerifier, Credentials, Session, SessionManager};
use crate::error::AppError;
use crate::metrics::{LOGIN_REJECTED, LOGIN_SUCCEEDED};

pub struct DefaultAuth {
    verifier: Arc<dyn CredentialVerifier>,
    sessions: Arc<SessionManager>,
}

impl DefaultAuth {
    pub fn new(verifier: Arc<dyn CredentialVerifier>, sessions: Arc<SessionManager>) -> Self {
        Self { verifier, sessions }
    }
}

#[async_trait]
impl AuthService for DefaultAuth {
    async fn login(&self, credentials: Credentials) -> Result<Session, AppError> {
        match self.verifier.verify(&credentials) {
            AuthOutcome::Success(principal) => {
                let session = self.sessions.issue(principal).await;
                counter!(LOGIN_SUCCEEDED).increment(1);
                info!(email = %session.principal.email, session_id = %session.session_id, "login succeeded");
                Ok(session)
            },
            AuthOutcome::Failure(reason) => {
                counter!(LOGIN_REJECTED).increment(1);
                // The reason is user-facing, not sensitive; the password never is
                debug!(email = %credentials.email, %reason, "login rejected");
                Err(AppError::InvalidCredentials)
            },
        }
    }

    async fn session(&self, token: &str) -> Option<Principal> {
        self.sessions.read(token).await
    }

    async fn logout(&self, token: &str) -> bool {
        self.sessions.revoke(token).await
    }
}
