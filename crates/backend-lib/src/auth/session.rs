// ============================
// crates/backend-lib/src/auth/session.rs
// ============================
//! Session issuance, validation and expiry.
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use metrics::{counter, gauge};
use phenotype_common::Principal;
use std::{collections::HashMap, sync::Arc, time::Duration};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::token::generate_secure_token;
use crate::metrics::{SESSIONS_ACTIVE, SESSION_EXPIRED, SESSION_ISSUED};

/// How often the background sweep prunes expired sessions
const SWEEP_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Session information
#[derive(Debug, Clone)]
pub struct Session {
    /// Server-side identifier, used only for logging
    pub session_id: Uuid,
    /// Opaque token handed to the client
    pub token: String,
    /// The principal this session authenticates
    pub principal: Principal,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Session manager for issuing and validating authentication tokens
#[derive(Clone)]
pub struct SessionManager {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    ttl: ChronoDuration,
}

impl SessionManager {
    /// Create a new session manager and spawn its expiry sweep task.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        let manager = SessionManager {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl: ChronoDuration::seconds(i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX)),
        };

        let manager_clone = manager.clone();
        tokio::spawn(async move {
            manager_clone.sweep_task().await;
        });

        manager
    }

    /// Issue a session for a verified principal.
    pub async fn issue(&self, principal: Principal) -> Session {
        let now = Utc::now();
        let session = Session {
            session_id: Uuid::new_v4(),
            token: generate_secure_token(),
            principal,
            issued_at: now,
            expires_at: now + self.ttl,
        };

        let mut sessions = self.sessions.write().await;
        sessions.insert(session.token.clone(), session.clone());

        counter!(SESSION_ISSUED).increment(1);
        gauge!(SESSIONS_ACTIVE).set(sessions.len() as f64);

        tracing::debug!(session_id = %session.session_id, "session issued");
        session
    }

    /// Resolve a presented token into its principal.
    ///
    /// A tampered, unknown or expired token is indistinguishable from the
    /// caller's point of view: all yield `None`. Expired entries are dropped
    /// eagerly on the way out.
    pub async fn read(&self, token: &str) -> Option<Principal> {
        let now = Utc::now();
        let expired = {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                Some(session) if !session.is_expired(now) => {
                    return Some(session.principal.clone());
                },
                Some(_) => true,
                None => false,
            }
        };

        if expired {
            let mut sessions = self.sessions.write().await;
            sessions.remove(token);
            counter!(SESSION_EXPIRED).increment(1);
            gauge!(SESSIONS_ACTIVE).set(sessions.len() as f64);
        }
        None
    }

    /// Revoke a session (logout). Returns whether a live session was removed.
    pub async fn revoke(&self, token: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        let removed = sessions.remove(token).is_some();
        if removed {
            gauge!(SESSIONS_ACTIVE).set(sessions.len() as f64);
        }
        removed
    }

    /// Number of live (unexpired or not-yet-swept) sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Periodically remove expired sessions so abandoned tokens do not
    /// accumulate in the map.
    async fn sweep_task(&self) {
        loop {
            tokio::time::sleep(SWEEP_INTERVAL).await;

            let now = Utc::now();
            let mut sessions = self.sessions.write().await;
            let before = sessions.len();
            sessions.retain(|_, session| !session.is_expired(now));
            let removed = before - sessions.len();

            if removed > 0 {
                counter!(SESSION_EXPIRED).increment(removed as u64);
                gauge!(SESSIONS_ACTIVE).set(sessions.len() as f64);
                tracing::debug!(removed, "swept expired sessions");
            }
        }
    }
}
