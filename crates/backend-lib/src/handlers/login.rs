// ============================
// crates/backend-lib/src/handlers/login.rs
// ============================
//! The login entry point: `POST /api/auth/login`.

use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use metrics::counter;
use phenotype_common::{LoginRequest, LoginResponse};
use std::sync::Arc;
use tracing::{error, instrument, warn};

use crate::auth::{session_cookie, Credentials};
use crate::error::AppError;
use crate::metrics::LOGIN_RATE_LIMITED;
use crate::AppState;

/// Verify the submitted credentials and set the session cookie on success.
///
/// Every outcome answers with the `{ ok, error? }` shape the login page
/// script expects; unexpected failures are collapsed into a generic message
/// so no internal detail reaches the client.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<LoginRequest>,
) -> Response {
    let ip = super::client_ip(&headers);
    if !state.login_limiter.check(ip) {
        counter!(LOGIN_RATE_LIMITED).increment(1);
        warn!(%ip, "login attempt while locked out");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(LoginResponse::rejected(
                "Too many login attempts, please try again later",
            )),
        )
            .into_response();
    }

    let credentials = Credentials::new(payload.email, payload.password);
    match state.auth.login(credentials).await {
        Ok(session) => {
            state.login_limiter.record_success(ip);

            let cookie = session_cookie(
                &session.token,
                state.settings.session_ttl_secs,
                state.settings.cookie_secure,
            );
            match cookie {
                Ok(value) => {
                    let mut response_headers = HeaderMap::new();
                    response_headers.insert(SET_COOKIE, value);
                    (
                        StatusCode::OK,
                        response_headers,
                        Json(LoginResponse::accepted()),
                    )
                        .into_response()
                },
                Err(err) => {
                    // Session exists but cannot be handed over; drop it again.
                    state.sessions.revoke(&session.token).await;
                    error!("failed to build session cookie: {err}");
                    unexpected_failure()
                },
            }
        },
        Err(AppError::InvalidCredentials) => {
            state.login_limiter.record_failure(ip);
            (
                StatusCode::UNAUTHORIZED,
                Json(LoginResponse::rejected("Invalid credentials")),
            )
                .into_response()
        },
        Err(err) => {
            error!("login failed unexpectedly: {err}");
            unexpected_failure()
        },
    }
}

fn unexpected_failure() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(LoginResponse::rejected(
            "Unexpected error, please try again",
        )),
    )
        .into_response()
}
