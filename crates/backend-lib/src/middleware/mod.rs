// crates/backend-lib/src/middleware/mod.rs

//! Middleware for the Phenotype Portal server.

pub mod session_guard;

pub use session_guard::require_session;
