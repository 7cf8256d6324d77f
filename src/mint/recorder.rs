//! Transaction record persistence
//!
//! The recorder sits behind a trait so the pipeline's save-failure policy
//! can be exercised without a live database.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::model::{MintTransaction, NewMintTransaction};

/// Store for mint transaction records.
#[async_trait]
pub trait TransactionRecorder: Send + Sync {
    /// Persist one transaction record.
    async fn record(&self, tx: &NewMintTransaction) -> anyhow::Result<()>;

    /// All recorded transactions in insertion order.
    async fn list(&self) -> anyhow::Result<Vec<MintTransaction>>;
}

/// PostgreSQL-backed recorder.
pub struct PgTransactionRecorder {
    db_pool: PgPool,
}

impl PgTransactionRecorder {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl TransactionRecorder for PgTransactionRecorder {
    async fn record(&self, tx: &NewMintTransaction) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO mint_transactions (
                id, transaction_hash, tx_created_at, network, state,
                from_address, smart, to_address
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&tx.transaction_hash)
        .bind(tx.tx_created_at)
        .bind(&tx.network)
        .bind(&tx.state)
        .bind(&tx.from_address)
        .bind(&tx.smart)
        .bind(&tx.to_address)
        .execute(&self.db_pool)
        .await?;

        Ok(())
    }

    async fn list(&self) -> anyhow::Result<Vec<MintTransaction>> {
        let rows =
            sqlx::query_as::<_, MintTransaction>("SELECT * FROM mint_transactions ORDER BY created_at")
                .fetch_all(&self.db_pool)
                .await?;

        Ok(rows)
    }
}
