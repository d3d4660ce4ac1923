//! Web page handler.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Serve the single-page UI. All data is loaded by its script through the JSON API.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
