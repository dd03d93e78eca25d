//! The `/` route: home for authenticated visitors, the login screen
//! otherwise, plus the form action handling login and logout.

use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Form, Router};
use serde::Deserialize;
use session::AuthData;
use ui_kit::FormState;

use crate::pages;
use crate::schema;
use crate::state::AppState;

pub fn index_routes() -> Router<AppState> {
    Router::new().route("/", get(index).post(index_action))
}

/// Which screen the index route shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexView {
    /// Authenticated visitors see the home screen.
    Home,
    /// Everyone else sees the login screen.
    Login,
}

impl IndexView {
    /// Picks the screen for the given authentication state.
    pub fn for_auth(auth: AuthData) -> Self {
        if auth.logged_in {
            Self::Home
        } else {
            Self::Login
        }
    }
}

async fn index(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    let auth = state.codec.get_auth(super::cookie_header(&headers));
    let page = match IndexView::for_auth(auth) {
        IndexView::Home => pages::home_page(),
        IndexView::Login => pages::index_login_page(FormState::new()),
    };
    Html(page)
}

/// Form payload of the index action. `_action=logout` requests a
/// logout; anything else is treated as a login attempt.
#[derive(Debug, Deserialize)]
pub struct ActionPayload {
    #[serde(rename = "_action")]
    pub action: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// What the index action decided to do, independent of HTTP plumbing.
#[derive(Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Clear the session cookie and redirect home.
    Logout,
    /// Issue a logged-in session cookie and redirect home.
    LogIn,
    /// Re-render the login screen with a form-level error.
    Invalid(String),
}

/// Classifies a submitted payload.
///
/// Login is a stub: any schema-valid credential pair is accepted until
/// a real credential backend exists.
pub fn decide_action(payload: &ActionPayload) -> ActionOutcome {
    if payload.action.as_deref() == Some("logout") {
        return ActionOutcome::Logout;
    }
    match schema::parse_login(&payload.email, &payload.password) {
        Ok(_) => ActionOutcome::LogIn,
        Err(_) => ActionOutcome::Invalid("Dados inválidos".to_owned()),
    }
}

async fn index_action(
    State(state): State<AppState>,
    Form(payload): Form<ActionPayload>,
) -> Response {
    match decide_action(&payload) {
        ActionOutcome::Logout => {
            tracing::debug!("session cleared");
            redirect_home(state.codec.clear_auth())
        }
        ActionOutcome::LogIn => {
            tracing::debug!("session issued");
            redirect_home(state.codec.serialize_auth(AuthData::logged_in()))
        }
        ActionOutcome::Invalid(message) => {
            // The password is never echoed back.
            let form = FormState::new()
                .with_value("email", payload.email.clone())
                .with_form_error(message);
            Html(pages::index_login_page(form)).into_response()
        }
    }
}

fn redirect_home(set_cookie: String) -> Response {
    ([(header::SET_COOKIE, set_cookie)], Redirect::to("/")).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(action: Option<&str>, email: &str, password: &str) -> ActionPayload {
        ActionPayload {
            action: action.map(str::to_owned),
            email: email.to_owned(),
            password: password.to_owned(),
        }
    }

    #[test]
    fn logout_action_wins_regardless_of_credentials() {
        assert_eq!(
            decide_action(&payload(Some("logout"), "", "")),
            ActionOutcome::Logout
        );
        assert_eq!(
            decide_action(&payload(Some("logout"), "a@b.com", "pw")),
            ActionOutcome::Logout
        );
    }

    #[test]
    fn valid_credentials_log_in() {
        assert_eq!(
            decide_action(&payload(None, "a@b.com", "pw")),
            ActionOutcome::LogIn
        );
    }

    #[test]
    fn invalid_credentials_yield_the_fixed_message() {
        assert_eq!(
            decide_action(&payload(None, "", "pw")),
            ActionOutcome::Invalid("Dados inválidos".to_owned())
        );
        assert_eq!(
            decide_action(&payload(None, "a@b.com", "")),
            ActionOutcome::Invalid("Dados inválidos".to_owned())
        );
    }

    #[test]
    fn unknown_action_is_treated_as_login() {
        assert_eq!(
            decide_action(&payload(Some("refresh"), "a@b.com", "pw")),
            ActionOutcome::LogIn
        );
    }

    #[test]
    fn index_view_follows_auth_state() {
        assert_eq!(IndexView::for_auth(AuthData::logged_in()), IndexView::Home);
        assert_eq!(IndexView::for_auth(AuthData::anonymous()), IndexView::Login);
    }
}
