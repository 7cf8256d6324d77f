//! Message route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::messages;
use crate::state::AppState;

pub fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/share", post(messages::share_message))
        .route("/messages", get(messages::get_messages))
}
