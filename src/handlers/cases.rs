//! Case handlers

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;

use crate::cases::{CaseResponse, CreateCaseRequest};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /postCases - store a new case
pub async fn post_case(
    State(state): State<AppState>,
    Json(req): Json<CreateCaseRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    state.case_service.create_case(req).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Case added successfully" })),
    ))
}

/// GET /getCases - all cases with owners expanded
pub async fn get_cases(
    State(state): State<AppState>,
) -> Result<Json<Vec<CaseResponse>>, ApiError> {
    let cases = state.case_service.list_cases().await?;
    Ok(Json(cases))
}
