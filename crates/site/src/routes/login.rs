//! The `/login` route. Authenticated visitors are bounced home.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;
use ui_kit::FormState;

use crate::pages;
use crate::state::AppState;

pub fn login_routes() -> Router<AppState> {
    Router::new().route("/login", get(login))
}

async fn login(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let auth = state.codec.get_auth(super::cookie_header(&headers));
    if auth.logged_in {
        return Redirect::to("/").into_response();
    }
    Html(pages::login_page(FormState::new())).into_response()
}
