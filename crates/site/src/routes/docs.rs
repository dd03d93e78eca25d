//! The `/ui-kit-docs` route: a living gallery of the primitive set.

use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::pages;
use crate::state::AppState;

pub fn docs_routes() -> Router<AppState> {
    Router::new().route("/ui-kit-docs", get(docs))
}

async fn docs() -> Html<String> {
    Html(pages::docs_page())
}
