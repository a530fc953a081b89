use axum::response::Html;

/// GET /
/// Serves the embedded single-page form. The page talks to the JSON API;
/// it carries no server-side state of its own.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
