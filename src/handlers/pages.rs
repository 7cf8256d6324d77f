//! Informational pages
//!
//! The previous deployment rendered server-side views here; these handlers
//! keep the three GET routes alive with minimal HTML. `/` still reflects
//! whether the caller has a live session.

use axum::{extract::State, response::Html};
use axum_extra::extract::CookieJar;

use crate::session::SESSION_COOKIE;
use crate::state::AppState;

/// GET / - home page, reflects session presence
pub async fn home(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    let is_logged_in = jar
        .get(SESSION_COOKIE)
        .map(|c| state.sessions.is_live(c.value()))
        .unwrap_or(false);

    let status = if is_logged_in {
        "You are logged in."
    } else {
        "You are not logged in."
    };

    Html(format!(
        "<html><body><h1>CaseLink</h1><p>{}</p></body></html>",
        status
    ))
}

/// GET /about
pub async fn about() -> Html<&'static str> {
    Html("<html><body><h1>About CaseLink</h1></body></html>")
}

/// GET /contact
pub async fn contact() -> Html<&'static str> {
    Html("<html><body><h1>Contact CaseLink</h1></body></html>")
}
