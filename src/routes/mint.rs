//! Mint pipeline route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::mint;
use crate::state::AppState;

pub fn mint_routes() -> Router<AppState> {
    Router::new()
        .route("/upload", post(mint::upload))
        .route("/getTransaction", get(mint::get_transactions))
}
