use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Error response type
///
/// `code` is stable and meant for programs; `error` is for people.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Every failure a handler can produce is one of these variants, and each
/// variant maps to exactly one HTTP status code and machine-readable code.
#[derive(Debug)]
pub enum ApiError {
    /// Request body is not valid JSON or lacks a string `key`/`value`
    MalformedRequest(serde_json::Error),
    /// Key is present but empty
    InvalidKey,
    /// An entry with this key already exists
    DuplicateKey(String),
    /// No entry with this key
    KeyNotFound(String),
    /// Durable storage failed
    StorageError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedRequest(_) | ApiError::InvalidKey | ApiError::DuplicateKey(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::KeyNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::MalformedRequest(_) => "malformed_request",
            ApiError::InvalidKey => "invalid_key",
            ApiError::DuplicateKey(_) => "duplicate_key",
            ApiError::KeyNotFound(_) => "not_found",
            ApiError::StorageError(_) => "storage_error",
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::MalformedRequest(err) => format!("Malformed request body: {}", err),
            ApiError::InvalidKey => "Invalid key: key must not be empty".to_string(),
            ApiError::DuplicateKey(key) => {
                format!("Duplicate key: an entry with key '{}' already exists", key)
            }
            ApiError::KeyNotFound(key) => format!("Key not found: {}", key),
            ApiError::StorageError(err) => format!("Storage error: {}", err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::StorageError(err) = &self {
            tracing::error!("Storage failure while handling request: {}", err);
        }

        let body = Json(ErrorResponse {
            code: self.code().to_string(),
            error: self.message(),
        });

        (self.status(), body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::EmptyKey => ApiError::InvalidKey,
            StoreError::DuplicateKey(key) => ApiError::DuplicateKey(key),
            StoreError::NotFound(key) => ApiError::KeyNotFound(key),
            StoreError::Storage(msg) => ApiError::StorageError(msg),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::MalformedRequest(err)
    }
}
