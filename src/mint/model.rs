//! Mint pipeline models

use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;

/// Display name baked into every minted token's metadata.
pub const NFT_NAME: &str = "A Wonderful NFT";

/// Description baked into every minted token's metadata.
pub const NFT_DESCRIPTION: &str = "Probably the most awesome NFT ever created!";

/// Name the metadata JSON is pinned under.
pub const METADATA_PIN_NAME: &str = "My NFT metadata Json";

/// File captured from the incoming multipart request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Response from both pinning endpoints.
#[derive(Debug, Deserialize)]
pub struct PinResponse {
    pub cid: String,
}

/// Fixed-shape token metadata referencing the pinned image.
#[derive(Debug, Serialize)]
pub struct NftMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
}

impl NftMetadata {
    /// Build the metadata object for a pinned image CID.
    pub fn for_image(image_cid: &str) -> Self {
        Self {
            name: NFT_NAME.to_string(),
            description: NFT_DESCRIPTION.to_string(),
            image: format!("ipfs://ipfs/{}", image_cid),
        }
    }
}

/// Transaction descriptor returned by the Starton contract-call endpoint.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MintCall {
    pub transaction_hash: String,
    pub created_at: DateTime<Utc>,
    pub network: String,
    pub state: String,
    pub from: String,
    pub to: String,
}

/// Transaction record about to be persisted.
///
/// Field remapping is part of the wire contract: `smart` takes the call
/// response's `to` (the contract address) and `to_address` takes the
/// configured receiver, not the call response's own `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMintTransaction {
    pub transaction_hash: String,
    pub tx_created_at: DateTime<Utc>,
    pub network: String,
    pub state: String,
    pub from_address: String,
    pub smart: String,
    pub to_address: String,
}

/// Stored transaction record, serialized with the field names clients of
/// `GET /getTransaction` already consume.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct MintTransaction {
    pub id: Uuid,
    #[serde(rename = "transactionHash")]
    pub transaction_hash: String,
    #[serde(rename = "createdAt")]
    pub tx_created_at: DateTime<Utc>,
    pub network: String,
    pub state: String,
    #[serde(rename = "from")]
    pub from_address: String,
    pub smart: String,
    #[serde(rename = "to")]
    pub to_address: String,
    #[serde(skip_serializing)]
    pub created_at: DateTime<Utc>,
}

/// Result of one pipeline run. `record_saved` is false when minting
/// succeeded but the local audit write failed; the caller still reports
/// success in that case.
#[derive(Debug, Clone)]
pub struct MintOutcome {
    pub transaction_hash: String,
    pub image_cid: String,
    pub record_saved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_shape() {
        let metadata = NftMetadata::for_image("imgCid123");
        let json = serde_json::to_value(&metadata).unwrap();

        assert_eq!(json["name"], NFT_NAME);
        assert_eq!(json["description"], NFT_DESCRIPTION);
        assert_eq!(json["image"], "ipfs://ipfs/imgCid123");
    }

    #[test]
    fn test_mint_call_deserializes_camel_case() {
        let body = serde_json::json!({
            "transactionHash": "0xabc",
            "createdAt": "2024-03-01T12:00:00Z",
            "network": "polygon-mumbai",
            "state": "pending",
            "from": "0xsigner",
            "to": "0xcontract"
        });

        let call: MintCall = serde_json::from_value(body).unwrap();
        assert_eq!(call.transaction_hash, "0xabc");
        assert_eq!(call.state, "pending");
        assert_eq!(call.to, "0xcontract");
    }

    #[test]
    fn test_transaction_wire_names() {
        let tx = MintTransaction {
            id: Uuid::new_v4(),
            transaction_hash: "0xabc".to_string(),
            tx_created_at: Utc::now(),
            network: "polygon-mumbai".to_string(),
            state: "pending".to_string(),
            from_address: "0xsigner".to_string(),
            smart: "0xcontract".to_string(),
            to_address: "0xreceiver".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["transactionHash"], "0xabc");
        assert_eq!(json["from"], "0xsigner");
        assert_eq!(json["smart"], "0xcontract");
        assert_eq!(json["to"], "0xreceiver");
        assert!(json.get("created_at").is_none());
    }
}
