//! Centralized API error handling for CaseLink
//!
//! This module provides a unified error type for API responses with proper
//! HTTP status code mapping. The wire shape is the flat `{"error": "<string>"}`
//! body the frontend already consumes; there are no structured error codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API error type with HTTP status code mapping
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    /// Lookup misses surface as 400, not 404: the login contract reports
    /// "User not found" with a 400 status and existing clients depend on it.
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Auth(String),

    #[error("{0}")]
    Storage(String),

    #[error("{0}")]
    Upstream(String),

    #[error("Internal server error")]
    Internal(String),
}

/// JSON error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    /// Get the HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::BAD_REQUEST,
            ApiError::Auth(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log server errors with their full detail; the client only ever
        // sees the generic message.
        match &self {
            ApiError::Storage(detail) | ApiError::Upstream(detail) | ApiError::Internal(detail) => {
                tracing::error!(error = %detail, status = %status.as_u16(), "Server error occurred");
            }
            _ => {
                tracing::debug!(error = %self, status = %status.as_u16(), "Client error occurred");
            }
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

// Convenience conversions from common error types

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Storage(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Upstream(err.to_string())
    }
}

impl From<axum::extract::multipart::MultipartError> for ApiError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        ApiError::Validation(format!("Invalid multipart body: {}", err))
    }
}

/// Result type alias using ApiError
pub type ApiResult<T> = Result<T, ApiError>;
