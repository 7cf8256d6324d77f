//! Message models

use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;

/// Stored message: a title and two free-text bodies.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Message {
    pub id: Uuid,
    pub title: String,
    pub message1: String,
    pub message2: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /share`
#[derive(Debug, Deserialize)]
pub struct ShareMessageRequest {
    pub title: String,
    pub message1: String,
    pub message2: String,
}
