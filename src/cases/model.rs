//! Case models and DTOs

use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::accounts::AccountResponse;

/// Stored case record. `owner_id` is a weak reference to an account:
/// resolved at read time, never enforced at write time.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Case {
    pub id: Uuid,
    pub case_no: String,
    pub case_name: String,
    pub primary_client: String,
    pub status: String,
    pub date_opened: Option<DateTime<Utc>>,
    pub date_closed: Option<DateTime<Utc>>,
    pub owner_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /postCases`. `user` carries the owning account id.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaseRequest {
    pub case_no: String,
    pub case_name: String,
    pub primary_client: String,
    pub status: String,
    pub date_opened: Option<DateTime<Utc>>,
    pub date_closed: Option<DateTime<Utc>>,
    pub user: Option<Uuid>,
}

/// Case as returned from `GET /getCases`, with the owner expanded under
/// `user`. Stays `null` when the referenced account does not exist.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseResponse {
    pub id: Uuid,
    pub case_no: String,
    pub case_name: String,
    pub primary_client: String,
    pub status: String,
    pub date_opened: Option<DateTime<Utc>>,
    pub date_closed: Option<DateTime<Utc>>,
    pub user: Option<AccountResponse>,
    pub created_at: DateTime<Utc>,
}
