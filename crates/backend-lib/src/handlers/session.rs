// ============================
// crates/backend-lib/src/handlers/session.rs
// ============================
//! Session query: `GET /api/auth/session`.

use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};
use phenotype_common::SessionInfo;
use std::sync::Arc;

use crate::auth::extract_session_token;
use crate::AppState;

/// Report whether the request carries a live session.
///
/// Missing, expired and tampered cookies all answer `authenticated: false`;
/// the endpoint never explains which it was.
pub async fn session(State(state): State<Arc<AppState>>, headers: HeaderMap) -> impl IntoResponse {
    let principal = match extract_session_token(&headers) {
        Some(token) => state.auth.session(&token).await,
        None => None,
    };

    let info = match principal {
        Some(principal) => SessionInfo::authenticated(principal),
        None => SessionInfo::anonymous(),
    };
    Json(info)
}
