//! Case service - creation and owner-expanded listing

use sqlx::types::chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::model::{Case, CaseResponse, CreateCaseRequest};
use crate::accounts::AccountResponse;

/// Joined row from the owner-expansion query. Owner columns come back null
/// when the weak reference points at nothing.
#[derive(sqlx::FromRow)]
struct CaseOwnerRow {
    id: Uuid,
    case_no: String,
    case_name: String,
    primary_client: String,
    status: String,
    date_opened: Option<DateTime<Utc>>,
    date_closed: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    owner_account_id: Option<Uuid>,
    owner_name: Option<String>,
    owner_email: Option<String>,
    owner_phone: Option<String>,
    owner_contract: Option<String>,
    owner_wallet: Option<String>,
    owner_meta_wallet: Option<String>,
    owner_created_at: Option<DateTime<Utc>>,
}

impl From<CaseOwnerRow> for CaseResponse {
    fn from(row: CaseOwnerRow) -> Self {
        let user = match (
            row.owner_account_id,
            row.owner_name,
            row.owner_email,
            row.owner_phone,
            row.owner_contract,
            row.owner_wallet,
            row.owner_meta_wallet,
            row.owner_created_at,
        ) {
            (
                Some(id),
                Some(name),
                Some(email),
                Some(phone),
                Some(contract),
                Some(wallet),
                Some(meta_wallet),
                Some(created_at),
            ) => Some(AccountResponse {
                id,
                name,
                email,
                phone,
                contract,
                wallet,
                meta_wallet,
                created_at,
            }),
            _ => None,
        };

        CaseResponse {
            id: row.id,
            case_no: row.case_no,
            case_name: row.case_name,
            primary_client: row.primary_client,
            status: row.status,
            date_opened: row.date_opened,
            date_closed: row.date_closed,
            user,
            created_at: row.created_at,
        }
    }
}

/// Service for case records.
pub struct CaseService {
    db_pool: PgPool,
}

impl CaseService {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    /// Insert a case. The owner reference is stored as-is, whether or not
    /// the account exists.
    pub async fn create_case(&self, req: CreateCaseRequest) -> Result<Case, sqlx::Error> {
        sqlx::query_as::<_, Case>(
            r#"
            INSERT INTO cases (
                id, case_no, case_name, primary_client, status,
                date_opened, date_closed, owner_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.case_no)
        .bind(&req.case_name)
        .bind(&req.primary_client)
        .bind(&req.status)
        .bind(req.date_opened)
        .bind(req.date_closed)
        .bind(req.user)
        .fetch_one(&self.db_pool)
        .await
    }

    /// All cases in insertion order, each with its owning account expanded
    /// when the account still exists.
    pub async fn list_cases(&self) -> Result<Vec<CaseResponse>, sqlx::Error> {
        let rows = sqlx::query_as::<_, CaseOwnerRow>(
            r#"
            SELECT
                c.id, c.case_no, c.case_name, c.primary_client, c.status,
                c.date_opened, c.date_closed, c.created_at,
                a.id AS owner_account_id,
                a.name AS owner_name,
                a.email AS owner_email,
                a.phone AS owner_phone,
                a.contract AS owner_contract,
                a.wallet AS owner_wallet,
                a.meta_wallet AS owner_meta_wallet,
                a.created_at AS owner_created_at
            FROM cases c
            LEFT JOIN accounts a ON a.id = c.owner_id
            ORDER BY c.created_at
            "#,
        )
        .fetch_all(&self.db_pool)
        .await?;

        Ok(rows.into_iter().map(CaseResponse::from).collect())
    }
}
