// ============================
// crates/backend-lib/src/auth/verifier.rs
// ============================
//! Credential verification.
//!
//! The verifier is the substitution seam for a real user store: callers only
//! see [`CredentialVerifier`], so swapping the shipped fixed-password
//! placeholder for a hashed-password lookup changes nothing upstream.

use phenotype_common::Principal;
use std::fmt;
use zeroize::Zeroize;

/// Transient email/password pair.
///
/// The password is zeroized when the credentials are dropped and is redacted
/// from debug output; it must never be logged or persisted.
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl Drop for Credentials {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Result of a verification attempt, returned as data rather than thrown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Credentials identify a valid principal
    Success(Principal),
    /// Rejection with a user-facing reason
    Failure(String),
}

/// Decides whether submitted credentials identify a valid principal.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, credentials: &Credentials) -> AuthOutcome;
}

/// Placeholder verifier: a single accepted password, any email.
///
/// Real user authentication belongs in a store-backed implementation of
/// [`CredentialVerifier`]; this one only exists so the login flow can be
/// exercised end to end.
pub struct FixedPasswordVerifier {
    accepted_password: String,
}

impl FixedPasswordVerifier {
    #[must_use]
    pub fn new(accepted_password: String) -> Self {
        Self { accepted_password }
    }
}

impl CredentialVerifier for FixedPasswordVerifier {
    fn verify(&self, credentials: &Credentials) -> AuthOutcome {
        if credentials.password == self.accepted_password {
            AuthOutcome::Success(Principal {
                id: "1".to_string(),
                name: "Test User".to_string(),
                email: credentials.email.clone(),
            })
        } else {
            AuthOutcome::Failure("Invalid credentials".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier() -> FixedPasswordVerifier {
        FixedPasswordVerifier::new("password123".to_string())
    }

    #[test]
    fn accepted_password_yields_principal_with_input_email() {
        for email in ["a@b.com", "someone@example.org", "not-even-an-email"] {
            let outcome = verifier().verify(&Credentials::new(email, "password123"));
            match outcome {
                AuthOutcome::Success(principal) => {
                    assert_eq!(principal.email, email);
                    assert_eq!(principal.id, "1");
                },
                AuthOutcome::Failure(reason) => panic!("unexpected failure: {reason}"),
            }
        }
    }

    #[test]
    fn any_other_password_is_a_failure() {
        for password in ["", "password124", "PASSWORD123", "password123 "] {
            let outcome = verifier().verify(&Credentials::new("a@b.com", password));
            assert_eq!(
                outcome,
                AuthOutcome::Failure("Invalid credentials".to_string())
            );
        }
    }

    #[test]
    fn debug_output_redacts_the_password() {
        let credentials = Credentials::new("a@b.com", "password123");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("a@b.com"));
        assert!(!debug.contains("password123"));
    }
}
