//! Mint pipeline tests
//!
//! These run the full pipeline against a local mock of the Starton API and
//! an in-memory transaction recorder, exercising step ordering, the stored
//! field remapping, and the save-failure policy.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

use caselink_server::config::MintConfig;
use caselink_server::mint::{
    MintService, MintTransaction, NewMintTransaction, StartonClient, TransactionRecorder,
    UploadedFile,
};

const RECEIVER: &str = "0x84EF41f146beAf8C4725EfDA3EAF27E7eEE39B6B";
const CONTRACT: &str = "0x4528b87321AF8919550E54a6aF96C8D032B66d43";
const SIGNER: &str = "0x5Bb267e2f180ACdA8F7648E2eB61B92Ceebc957c";

// ============================================================================
// Mock Starton API
// ============================================================================

#[derive(Default)]
struct MockStarton {
    /// Endpoint names in the order they were hit.
    calls: Mutex<Vec<String>>,
    /// Body of the contract-call request, captured for assertions.
    mint_request: Mutex<Option<Value>>,
    fail_image_pin: bool,
    fail_metadata_pin: bool,
}

async fn mock_pin_file(
    State(mock): State<Arc<MockStarton>>,
    mut multipart: Multipart,
) -> (StatusCode, Json<Value>) {
    mock.calls.lock().unwrap().push("ipfs/file".to_string());

    // The pipeline must send the file part plus isSync=true.
    let mut saw_file = false;
    let mut saw_is_sync = false;
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("file") => {
                assert_eq!(field.file_name(), Some("evidence.png"));
                assert!(!field.bytes().await.unwrap().is_empty());
                saw_file = true;
            }
            Some("isSync") => {
                assert_eq!(field.text().await.unwrap(), "true");
                saw_is_sync = true;
            }
            _ => {}
        }
    }
    assert!(saw_file && saw_is_sync);

    if mock.fail_image_pin {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "pinning unavailable" })),
        );
    }

    (StatusCode::OK, Json(json!({ "cid": "imgCid123" })))
}

async fn mock_pin_json(
    State(mock): State<Arc<MockStarton>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    mock.calls.lock().unwrap().push("ipfs/json".to_string());

    assert_eq!(body["isSync"], json!(true));
    assert_eq!(body["content"]["image"], "ipfs://ipfs/imgCid123");

    if mock.fail_metadata_pin {
        return (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "message": "pinning unavailable" })),
        );
    }

    (StatusCode::OK, Json(json!({ "cid": "metaCid456" })))
}

async fn mock_call_contract(
    State(mock): State<Arc<MockStarton>>,
    Path((network, contract)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Json<Value> {
    mock.calls.lock().unwrap().push("call".to_string());
    *mock.mint_request.lock().unwrap() = Some(body);

    assert_eq!(network, "polygon-mumbai");
    assert_eq!(contract, CONTRACT);

    Json(json!({
        "transactionHash": "0xabc",
        "createdAt": "2024-03-01T12:00:00Z",
        "network": "polygon-mumbai",
        "state": "pending",
        "from": "0xSignerSide",
        "to": "0xContractSide"
    }))
}

/// Start the mock server on an ephemeral port and return its address.
async fn start_mock(mock: Arc<MockStarton>) -> SocketAddr {
    let app = Router::new()
        .route("/ipfs/file", post(mock_pin_file))
        .route("/ipfs/json", post(mock_pin_json))
        .route(
            "/smart-contract/:network/:contract/call",
            post(mock_call_contract),
        )
        .with_state(mock);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

// ============================================================================
// In-memory recorder
// ============================================================================

#[derive(Default)]
struct MemoryRecorder {
    records: Mutex<Vec<MintTransaction>>,
    fail: bool,
}

#[async_trait]
impl TransactionRecorder for MemoryRecorder {
    async fn record(&self, tx: &NewMintTransaction) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("connection refused");
        }

        self.records.lock().unwrap().push(MintTransaction {
            id: Uuid::new_v4(),
            transaction_hash: tx.transaction_hash.clone(),
            tx_created_at: tx.tx_created_at,
            network: tx.network.clone(),
            state: tx.state.clone(),
            from_address: tx.from_address.clone(),
            smart: tx.smart.clone(),
            to_address: tx.to_address.clone(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn list(&self) -> anyhow::Result<Vec<MintTransaction>> {
        Ok(self.records.lock().unwrap().clone())
    }
}

// ============================================================================
// Harness
// ============================================================================

fn mint_config(base_url: String) -> MintConfig {
    MintConfig {
        starton_base_url: base_url,
        starton_api_key: "sk_test".to_string(),
        network: "polygon-mumbai".to_string(),
        contract_address: CONTRACT.to_string(),
        signer_wallet: SIGNER.to_string(),
        receiver_address: RECEIVER.to_string(),
        outbound_timeout: None,
    }
}

fn test_upload() -> UploadedFile {
    UploadedFile {
        filename: "evidence.png".to_string(),
        content_type: "image/png".to_string(),
        bytes: vec![0x89, 0x50, 0x4e, 0x47],
    }
}

async fn build_service(
    mock: Arc<MockStarton>,
    recorder: Arc<MemoryRecorder>,
) -> MintService {
    let addr = start_mock(mock).await;
    let config = mint_config(format!("http://{}", addr));
    let client = StartonClient::new(&config).unwrap();
    MintService::new(client, recorder, config)
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_successful_run_returns_hash_and_image_cid() {
    let mock = Arc::new(MockStarton::default());
    let recorder = Arc::new(MemoryRecorder::default());
    let service = build_service(mock.clone(), recorder.clone()).await;

    let outcome = service.mint_upload(test_upload()).await.unwrap();

    assert_eq!(outcome.transaction_hash, "0xabc");
    // The response carries the image CID, not the metadata CID.
    assert_eq!(outcome.image_cid, "imgCid123");
    assert!(outcome.record_saved);

    // Steps ran in strict order.
    assert_eq!(
        *mock.calls.lock().unwrap(),
        vec!["ipfs/file", "ipfs/json", "call"]
    );
}

#[tokio::test]
async fn test_mint_request_body() {
    let mock = Arc::new(MockStarton::default());
    let recorder = Arc::new(MemoryRecorder::default());
    let service = build_service(mock.clone(), recorder).await;

    service.mint_upload(test_upload()).await.unwrap();

    let body = mock.mint_request.lock().unwrap().clone().unwrap();
    assert_eq!(body["functionName"], "mint");
    assert_eq!(body["signerWallet"], SIGNER);
    assert_eq!(body["speed"], "low");
    // Mint params are the receiver and the metadata CID from step 3.
    assert_eq!(body["params"], json!([RECEIVER, "metaCid456"]));
}

#[tokio::test]
async fn test_recorded_transaction_field_remapping() {
    let mock = Arc::new(MockStarton::default());
    let recorder = Arc::new(MemoryRecorder::default());
    let service = build_service(mock, recorder.clone()).await;

    service.mint_upload(test_upload()).await.unwrap();

    let records = recorder.list().await.unwrap();
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.transaction_hash, "0xabc");
    assert_eq!(record.network, "polygon-mumbai");
    assert_eq!(record.state, "pending");
    assert_eq!(record.from_address, "0xSignerSide");
    // `smart` takes the call response's `to` (the contract side) while
    // `to_address` is the configured receiver, not the call's own `to`.
    assert_eq!(record.smart, "0xContractSide");
    assert_eq!(record.to_address, RECEIVER);
    assert_eq!(
        record.tx_created_at,
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    );
}

#[tokio::test]
async fn test_image_pin_failure_stops_the_run() {
    let mock = Arc::new(MockStarton {
        fail_image_pin: true,
        ..Default::default()
    });
    let recorder = Arc::new(MemoryRecorder::default());
    let service = build_service(mock.clone(), recorder.clone()).await;

    let result = service.mint_upload(test_upload()).await;
    assert!(result.is_err());

    // No metadata pin, no mint call, no record.
    assert_eq!(*mock.calls.lock().unwrap(), vec!["ipfs/file"]);
    assert!(recorder.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_metadata_pin_failure_stops_before_mint() {
    let mock = Arc::new(MockStarton {
        fail_metadata_pin: true,
        ..Default::default()
    });
    let recorder = Arc::new(MemoryRecorder::default());
    let service = build_service(mock.clone(), recorder.clone()).await;

    let result = service.mint_upload(test_upload()).await;
    assert!(result.is_err());

    assert_eq!(*mock.calls.lock().unwrap(), vec!["ipfs/file", "ipfs/json"]);
    assert!(recorder.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_record_save_failure_still_reports_success() {
    let mock = Arc::new(MockStarton::default());
    let recorder = Arc::new(MemoryRecorder {
        fail: true,
        ..Default::default()
    });
    let service = build_service(mock.clone(), recorder.clone()).await;

    // Minting succeeded, so the run succeeds even though the save failed.
    let outcome = service.mint_upload(test_upload()).await.unwrap();

    assert_eq!(outcome.transaction_hash, "0xabc");
    assert_eq!(outcome.image_cid, "imgCid123");
    assert!(!outcome.record_saved);
    assert!(recorder.list().await.unwrap().is_empty());

    // The mint call itself was still made.
    assert_eq!(
        *mock.calls.lock().unwrap(),
        vec!["ipfs/file", "ipfs/json", "call"]
    );
}
