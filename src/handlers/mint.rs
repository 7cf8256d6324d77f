//! Upload-and-mint handlers

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::error::ApiError;
use crate::mint::{MintTransaction, UploadedFile};
use crate::state::AppState;

/// Body of the 201 response from `POST /upload`.
///
/// `cid` is the image CID, not the metadata CID; clients depend on that
/// (see DESIGN.md for the naming defect note).
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    #[serde(rename = "transactionHash")]
    pub transaction_hash: String,
    pub cid: String,
}

/// POST /upload - run the mint pipeline on the `file` multipart field
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    let mut upload: Option<UploadedFile> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field.bytes().await?.to_vec();

        upload = Some(UploadedFile {
            filename,
            content_type,
            bytes,
        });
        break;
    }

    let upload = upload.ok_or_else(|| {
        ApiError::Validation("Missing multipart field 'file'".to_string())
    })?;

    let outcome = state
        .mint_service
        .mint_upload(upload)
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            transaction_hash: outcome.transaction_hash,
            cid: outcome.image_cid,
        }),
    ))
}

/// GET /getTransaction - all recorded mint transactions
pub async fn get_transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<MintTransaction>>, ApiError> {
    let transactions = state
        .mint_service
        .list_transactions()
        .await
        .map_err(|e| ApiError::Storage(e.to_string()))?;

    Ok(Json(transactions))
}
