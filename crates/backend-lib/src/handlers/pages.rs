// ============================
// crates/backend-lib/src/handlers/pages.rs
// ============================
//! HTML page handlers.

use axum::{response::Html, Extension};
use phenotype_common::Principal;

use crate::views;

/// `GET /` — public welcome page
pub async fn index() -> Html<&'static str> {
    Html(views::INDEX_PAGE)
}

/// `GET /login` — login form
pub async fn login_page() -> Html<&'static str> {
    Html(views::LOGIN_PAGE)
}

/// `GET /symptoms` — protected view.
///
/// The principal arrives as a request extension inserted by the route
/// guard; this handler only renders.
pub async fn symptoms(Extension(principal): Extension<Principal>) -> Html<String> {
    Html(views::render_symptoms_page(&principal))
}
