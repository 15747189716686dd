// ============================
// crates/backend-lib/src/handlers/logout.rs
// ============================
//! Logout: `POST /api/auth/logout`.

use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::error;

use crate::auth::{clear_session_cookie, extract_session_token};
use crate::AppState;

/// Revoke the current session, if any, and clear the cookie.
///
/// Always clears the cookie, even when the session record was already gone.
pub async fn logout(State(state): State<Arc<AppState>>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = extract_session_token(&headers) {
        state.auth.logout(&token).await;
    }

    let mut response_headers = HeaderMap::new();
    match clear_session_cookie(state.settings.cookie_secure) {
        Ok(value) => {
            response_headers.insert(SET_COOKIE, value);
        },
        Err(err) => error!("failed to build clearing cookie: {err}"),
    }
    (StatusCode::NO_CONTENT, response_headers)
}
