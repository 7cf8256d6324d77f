//! Informational page routes

use axum::{routing::get, Router};

use crate::handlers::pages;
use crate::state::AppState;

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact))
}
