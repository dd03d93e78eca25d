//! HTTP route handlers.

use axum::http::{header, HeaderMap};

mod docs;
mod index;
mod login;

pub use docs::docs_routes;
pub use index::{decide_action, index_routes, ActionOutcome, ActionPayload, IndexView};
pub use login::login_routes;

/// Raw `Cookie` header of a request, if present and valid UTF-8.
pub(crate) fn cookie_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::COOKIE)?.to_str().ok()
}
