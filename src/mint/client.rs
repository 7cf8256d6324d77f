//! HTTP client for the Starton pinning and contract-call API
//!
//! One `reqwest::Client` is built at startup with the API key as a default
//! header. No timeout is applied unless configured; a slow upstream call
//! holds its request open indefinitely.

use reqwest::multipart::{Form, Part};
use serde_json::json;

use super::model::{MintCall, NftMetadata, PinResponse, UploadedFile};
use crate::config::MintConfig;

/// Errors from the Starton API
#[derive(Debug, thiserror::Error)]
pub enum StartonError {
    #[error("Starton request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Starton returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Invalid upload content type: {0}")]
    InvalidContentType(String),

    #[error("Invalid Starton client configuration: {0}")]
    InvalidConfig(String),
}

/// Client for the Starton IPFS and smart-contract endpoints.
#[derive(Clone)]
pub struct StartonClient {
    http: reqwest::Client,
    base_url: String,
}

impl StartonClient {
    /// Build a client from mint configuration.
    pub fn new(config: &MintConfig) -> Result<Self, StartonError> {
        let mut headers = reqwest::header::HeaderMap::new();
        let mut api_key = reqwest::header::HeaderValue::from_str(&config.starton_api_key)
            .map_err(|_| {
                StartonError::InvalidConfig("API key is not a valid header value".to_string())
            })?;
        api_key.set_sensitive(true);
        headers.insert("x-api-key", api_key);

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.outbound_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.starton_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Pin a file to IPFS. Returns the content identifier.
    pub async fn pin_file(&self, upload: &UploadedFile) -> Result<PinResponse, StartonError> {
        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.filename.clone())
            .mime_str(&upload.content_type)
            .map_err(|_| StartonError::InvalidContentType(upload.content_type.clone()))?;

        let form = Form::new().part("file", part).text("isSync", "true");

        let response = self
            .http
            .post(format!("{}/ipfs/file", self.base_url))
            .multipart(form)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Pin a metadata JSON object to IPFS. Returns the content identifier.
    pub async fn pin_json(
        &self,
        name: &str,
        content: &NftMetadata,
    ) -> Result<PinResponse, StartonError> {
        let response = self
            .http
            .post(format!("{}/ipfs/json", self.base_url))
            .json(&json!({
                "name": name,
                "content": content,
                "isSync": true,
            }))
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Invoke the mint function on the configured contract.
    pub async fn call_mint(
        &self,
        config: &MintConfig,
        receiver_address: &str,
        metadata_cid: &str,
    ) -> Result<MintCall, StartonError> {
        let response = self
            .http
            .post(format!(
                "{}/smart-contract/{}/{}/call",
                self.base_url, config.network, config.contract_address
            ))
            .json(&json!({
                "functionName": "mint",
                "signerWallet": config.signer_wallet,
                "speed": "low",
                "params": [receiver_address, metadata_cid],
            }))
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StartonError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StartonError::Status { status, body });
        }

        Ok(response.json::<T>().await?)
    }
}
