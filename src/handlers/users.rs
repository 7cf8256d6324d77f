//! Added-user and account-listing handlers

use axum::{extract::State, Json};

use crate::accounts::{Account, AddUserRequest, AddedUser};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /adduser - store a secondary user record
pub async fn add_user(
    State(state): State<AppState>,
    Json(req): Json<AddUserRequest>,
) -> Result<Json<AddedUser>, ApiError> {
    let user = state.account_service.add_user(req).await?;
    Ok(Json(user))
}

/// GET /getuser - all registered accounts, no filtering
pub async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<Account>>, ApiError> {
    let accounts = state.account_service.list_accounts().await?;
    Ok(Json(accounts))
}
