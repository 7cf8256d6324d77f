//! Case route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::cases;
use crate::state::AppState;

pub fn case_routes() -> Router<AppState> {
    Router::new()
        .route("/postCases", post(cases::post_case))
        .route("/getCases", get(cases::get_cases))
}
