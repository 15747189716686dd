// ============================
// crates/backend-lib/src/auth/rate_limit.rs
// ============================
//! Rate limiting for login attempts.

use dashmap::DashMap;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Entry tracking failed logins from one address
#[derive(Debug, Clone)]
struct AttemptEntry {
    failures: u32,
    last_failure: Instant,
    locked_until: Option<Instant>,
}

/// Per-IP lockout for failed login attempts
#[derive(Debug, Clone)]
pub struct AuthRateLimiter {
    attempts: Arc<DashMap<IpAddr, AttemptEntry>>,
    max_attempts: u32,
    lockout: Duration,
}

impl AuthRateLimiter {
    #[must_use]
    pub fn new(max_attempts: u32, lockout: Duration) -> Self {
        Self {
            attempts: Arc::new(DashMap::new()),
            max_attempts,
            lockout,
        }
    }

    /// Whether this address may attempt a login right now.
    pub fn check(&self, ip: IpAddr) -> bool {
        match self.attempts.get(&ip) {
            Some(entry) => match entry.locked_until {
                Some(until) => Instant::now() >= until,
                None => true,
            },
            None => true,
        }
    }

    /// Record a failed login; locks the address out once the failure budget
    /// is spent.
    pub fn record_failure(&self, ip: IpAddr) {
        let now = Instant::now();
        let mut entry = self.attempts.entry(ip).or_insert_with(|| AttemptEntry {
            failures: 0,
            last_failure: now,
            locked_until: None,
        });

        // A lockout that already lapsed starts a fresh budget
        if matches!(entry.locked_until, Some(until) if now >= until) {
            entry.failures = 0;
            entry.locked_until = None;
        }

        entry.failures += 1;
        entry.last_failure = now;

        if entry.failures >= self.max_attempts {
            entry.locked_until = Some(now + self.lockout);
            tracing::warn!(%ip, failures = entry.failures, "login attempts locked out");
        }
    }

    /// A successful login clears the address's failure history.
    pub fn record_success(&self, ip: IpAddr) {
        self.attempts.remove(&ip);
    }

    /// Drop lapsed lockouts and stale failure counts.
    pub fn cleanup(&self) {
        let now = Instant::now();
        self.attempts.retain(|_, entry| {
            if let Some(until) = entry.locked_until {
                return now < until;
            }
            now.duration_since(entry.last_failure) < Duration::from_secs(24 * 60 * 60)
        });
    }
}
