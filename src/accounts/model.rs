//! Account models and request/response DTOs
//!
//! Wire field names (`Wallet`, `metaWallet`, `walletaddress`) are kept exactly
//! as the existing frontend sends them.

use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;

/// Stored account. `password` holds the bcrypt hash, never plaintext.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub contract: String,
    #[serde(rename = "Wallet")]
    pub wallet: String,
    #[serde(rename = "metaWallet")]
    pub meta_wallet: String,
    pub created_at: DateTime<Utc>,
}

/// Account as returned from login: the same record minus the password hash.
#[derive(Debug, Serialize, Clone)]
pub struct AccountResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub contract: String,
    #[serde(rename = "Wallet")]
    pub wallet: String,
    #[serde(rename = "metaWallet")]
    pub meta_wallet: String,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            email: account.email,
            phone: account.phone,
            contract: account.contract,
            wallet: account.wallet,
            meta_wallet: account.meta_wallet,
            created_at: account.created_at,
        }
    }
}

/// Secondary user record created via `POST /adduser`. Written once, only ever
/// read back as part of nothing: the listing endpoint returns accounts.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct AddedUser {
    pub id: Uuid,
    pub designation: String,
    pub name: String,
    #[serde(rename = "walletaddress")]
    pub wallet_address: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /register`
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub contract: String,
    #[serde(rename = "Wallet")]
    pub wallet: String,
    #[serde(rename = "metaWallet")]
    pub meta_wallet: String,
}

/// Body of `POST /login`
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

/// Body of `POST /adduser`
#[derive(Debug, Deserialize)]
pub struct AddUserRequest {
    pub designation: String,
    pub name: String,
    #[serde(rename = "walletaddress")]
    pub wallet_address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_response_drops_password() {
        let account = Account {
            id: Uuid::new_v4(),
            name: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "$2b$10$hash".to_string(),
            phone: "555-0100".to_string(),
            contract: "0xc".to_string(),
            wallet: "0xw".to_string(),
            meta_wallet: "0xm".to_string(),
            created_at: Utc::now(),
        };

        let response = AccountResponse::from(account);
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("password").is_none());
        assert_eq!(json["name"], "alice");
        assert_eq!(json["Wallet"], "0xw");
        assert_eq!(json["metaWallet"], "0xm");
    }

    #[test]
    fn test_register_request_wire_names() {
        let body = serde_json::json!({
            "name": "bob",
            "email": "bob@example.com",
            "password": "hunter2",
            "phone": "555-0101",
            "contract": "0xc",
            "Wallet": "0xw",
            "metaWallet": "0xm"
        });

        let req: RegisterRequest = serde_json::from_value(body).unwrap();
        assert_eq!(req.wallet, "0xw");
        assert_eq!(req.meta_wallet, "0xm");
    }
}
