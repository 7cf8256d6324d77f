//! Account service - registration, login, and listings

use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use uuid::Uuid;

use super::model::{Account, AddUserRequest, AddedUser, RegisterRequest};

/// Login failures, kept distinct so the handler can map them to the two
/// fixed error strings clients already match on.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("User not found")]
    UserNotFound,

    #[error("Wrong password")]
    WrongPassword,

    #[error("password verification failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Service for account records and the secondary added-user list.
pub struct AccountService {
    db_pool: PgPool,
}

impl AccountService {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    /// Register a new account, hashing the password before it is stored.
    /// Names are not deduplicated; registering the same name twice creates
    /// two rows.
    pub async fn register(&self, req: RegisterRequest) -> anyhow::Result<Account> {
        let password_hash = hash(&req.password, DEFAULT_COST)?;

        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (id, name, email, password, phone, contract, wallet, meta_wallet)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.name)
        .bind(&req.email)
        .bind(&password_hash)
        .bind(&req.phone)
        .bind(&req.contract)
        .bind(&req.wallet)
        .bind(&req.meta_wallet)
        .fetch_one(&self.db_pool)
        .await?;

        tracing::info!(account_id = %account.id, name = %account.name, "Account registered");

        Ok(account)
    }

    /// Authenticate by name and password. The first row matching the name
    /// wins; there is no secondary filtering.
    pub async fn login(&self, name: &str, password: &str) -> Result<Account, LoginError> {
        let account = self
            .find_by_name(name)
            .await?
            .ok_or(LoginError::UserNotFound)?;

        if !verify(password, &account.password)? {
            return Err(LoginError::WrongPassword);
        }

        Ok(account)
    }

    /// First account matching the given name, if any.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Account>, sqlx::Error> {
        sqlx::query_as::<_, Account>(
            "SELECT * FROM accounts WHERE name = $1 ORDER BY created_at LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.db_pool)
        .await
    }

    /// One arbitrary account, for `GET /getlogin`.
    pub async fn first_account(&self) -> Result<Option<Account>, sqlx::Error> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts ORDER BY created_at LIMIT 1")
            .fetch_optional(&self.db_pool)
            .await
    }

    /// All accounts in insertion order. Unbounded by design.
    pub async fn list_accounts(&self) -> Result<Vec<Account>, sqlx::Error> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts ORDER BY created_at")
            .fetch_all(&self.db_pool)
            .await
    }

    /// Insert an added-user record and return it.
    pub async fn add_user(&self, req: AddUserRequest) -> Result<AddedUser, sqlx::Error> {
        sqlx::query_as::<_, AddedUser>(
            r#"
            INSERT INTO added_users (id, designation, name, wallet_address)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.designation)
        .bind(&req.name)
        .bind(&req.wallet_address)
        .fetch_one(&self.db_pool)
        .await
    }
}
