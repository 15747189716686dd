// ================
// common/src/lib.rs
// ================
//! Common types and structures
//! used for communication between the Phenotype Portal server and its
//! browser/API clients. This module defines the auth request/response
//! payloads and the principal record they carry.

use serde::{Deserialize, Serialize};

/// The authenticated identity associated with a session.
///
/// Created by the credential verifier on successful authentication and
/// immutable for the lifetime of the session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Stable user identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address the principal authenticated with
    pub email: String,
}

/// Body of `POST /api/auth/login`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of the login entry point: `{ ok, error? }`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub ok: bool,
    /// Failure reason, present only when `ok` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LoginResponse {
    #[must_use]
    pub fn accepted() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    #[must_use]
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(reason.into()),
        }
    }
}

/// Response of `GET /api/auth/session`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SessionInfo {
    pub authenticated: bool,
    /// The current principal, present only when authenticated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<Principal>,
}

impl SessionInfo {
    #[must_use]
    pub fn authenticated(principal: Principal) -> Self {
        Self {
            authenticated: true,
            principal: Some(principal),
        }
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            principal: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Context, Result};

    #[test]
    fn login_request_round_trips() -> Result<()> {
        let request: LoginRequest =
            serde_json::from_str(r#"{"email":"a@b.com","password":"password123"}"#)?;
        assert_eq!(request.email, "a@b.com");
        assert_eq!(request.password, "password123");
        Ok(())
    }

    #[test]
    fn login_response_omits_error_when_ok() -> Result<()> {
        let value = serde_json::to_value(LoginResponse::accepted())?;
        assert_eq!(value.get("ok").and_then(serde_json::Value::as_bool), Some(true));
        assert!(value.get("error").is_none());
        Ok(())
    }

    #[test]
    fn login_response_carries_reason_when_rejected() -> Result<()> {
        let value = serde_json::to_value(LoginResponse::rejected("Invalid credentials"))?;
        assert_eq!(value.get("ok").and_then(serde_json::Value::as_bool), Some(false));
        let reason = value
            .get("error")
            .and_then(serde_json::Value::as_str)
            .context("missing error")?;
        assert_eq!(reason, "Invalid credentials");
        Ok(())
    }

    #[test]
    fn session_info_round_trips() -> Result<()> {
        let info = SessionInfo::authenticated(Principal {
            id: "1".to_string(),
            name: "Test User".to_string(),
            email: "a@b.com".to_string(),
        });
        let value = serde_json::to_value(&info)?;
        let decoded: SessionInfo = serde_json::from_value(value)?;
        assert!(decoded.authenticated);
        let principal = decoded.principal.context("missing principal")?;
        assert_eq!(principal.email, "a@b.com");

        let anonymous = serde_json::to_value(SessionInfo::anonymous())?;
        assert!(anonymous.get("principal").is_none());
        Ok(())
    }
}
