//! Message service

use sqlx::PgPool;
use uuid::Uuid;

use super::model::{Message, ShareMessageRequest};

/// Service for shared messages.
pub struct MessageService {
    db_pool: PgPool,
}

impl MessageService {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    pub async fn create_message(&self, req: ShareMessageRequest) -> Result<Message, sqlx::Error> {
        sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (id, title, message1, message2)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.title)
        .bind(&req.message1)
        .bind(&req.message2)
        .fetch_one(&self.db_pool)
        .await
    }

    /// All messages in insertion order.
    pub async fn list_messages(&self) -> Result<Vec<Message>, sqlx::Error> {
        sqlx::query_as::<_, Message>("SELECT * FROM messages ORDER BY created_at")
            .fetch_all(&self.db_pool)
            .await
    }
}
