//! Landing page route handler.
//!
//! Serves the embedded text input page.

use axum::response::{Html, IntoResponse};

const INDEX_HTML: &str = include_str!("../../../../assets/web/index.html");

/// GET / - Serve the landing page.
pub async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}
