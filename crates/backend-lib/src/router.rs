// ============================
// crates/backend-lib/src/router.rs
// ============================
//! HTTP router: public pages, auth endpoints and the guarded symptoms view.
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::require_session;
use crate::AppState;

/// Create the application router.
///
/// Protected routes sit behind the session guard via `route_layer`, so the
/// guard runs on every request to them and on nothing else.
pub fn create_router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .route("/symptoms", get(handlers::pages::symptoms))
        .route_layer(axum::middleware::from_fn_with_state(
            Arc::clone(&state),
            require_session,
        ));

    Router::new()
        .route("/", get(handlers::pages::index))
        .route("/login", get(handlers::pages::login_page))
        .route("/health", get(handlers::health::health))
        .route("/api/auth/login", post(handlers::login::login))
        .route("/api/auth/session", get(handlers::session::session))
        .route("/api/auth/logout", post(handlers::logout::logout))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
