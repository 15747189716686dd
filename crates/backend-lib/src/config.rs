// ============================
// crates/backend-lib/src/config.rs
// ============================
//! Configuration management.
use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Environment variable prefix, e.g. `PHENOTYPE_BIND_ADDR`.
const ENV_PREFIX: &str = "PHENOTYPE_";

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Server bind address
    pub bind_addr: SocketAddr,
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
    /// Session TTL in seconds
    pub session_ttl_secs: u64,
    /// Mark the session cookie `Secure` (requires HTTPS in front)
    pub cookie_secure: bool,
    /// Password accepted by the placeholder credential verifier
    pub accepted_password: String,
    /// Login attempt lockout
    pub rate_limit: RateLimitSettings,
}

/// Per-IP lockout policy for failed login attempts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitSettings {
    /// Failed attempts before the IP is locked out
    pub max_attempts: u32,
    /// Lockout duration in seconds
    pub lockout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: ([127, 0, 0, 1], 3000).into(),
            log_level: "info".to_string(),
            session_ttl_secs: 60 * 60 * 24, // 24 hours
            cookie_secure: false,
            accepted_password: "password123".to_string(),
            rate_limit: RateLimitSettings::default(),
        }
    }
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            lockout_secs: 5 * 60,
        }
    }
}

impl Settings {
    /// Load settings from `config.toml` and `PHENOTYPE_*` environment
    /// variables, layered over the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    /// Load settings with an explicit config file path.
    pub fn load_from(path: &str) -> Result<Self> {
        let settings = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        Ok(settings)
    }
}
