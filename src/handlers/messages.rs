//! Message handlers

use axum::{extract::State, Json};
use serde_json::json;

use crate::error::ApiError;
use crate::messages::{Message, ShareMessageRequest};
use crate::state::AppState;

/// POST /share - store a message
pub async fn share_message(
    State(state): State<AppState>,
    Json(req): Json<ShareMessageRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.message_service.create_message(req).await?;

    Ok(Json(json!({ "message": "Message shared successfully" })))
}

/// GET /messages - all messages in insertion order
pub async fn get_messages(State(state): State<AppState>) -> Result<Json<Vec<Message>>, ApiError> {
    let messages = state.message_service.list_messages().await?;
    Ok(Json(messages))
}
