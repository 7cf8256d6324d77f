//! User route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::users;
use crate::state::AppState;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/adduser", post(users::add_user))
        .route("/getuser", get(users::get_users))
}
