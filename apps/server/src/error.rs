//! # API Error Type
//!
//! Unified error envelope for HTTP responses.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Error Flow in Stockroom                        │
//! │                                                                     │
//! │  Handler calls a manager operation                                  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  CoreError::ProductNotFound ──► ApiError { NOT_FOUND } ──► 404      │
//! │  CoreError::UserNotFound ─────► ApiError { NOT_FOUND } ──► 404      │
//! │  CoreError::InvalidQuantity ──► ApiError { INVALID_QUANTITY } ► 400 │
//! │  CoreError::InsufficientStock ► ApiError { INSUFFICIENT_STOCK }► 400│
//! │  anything else ───────────────► ApiError { INTERNAL } ──► 500       │
//! │                                                                     │
//! │  Body: { "code": "NOT_FOUND", "message": "Product not found: …" }   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Keeps the domain free of transport concerns: the translation from
//! [`CoreError`] to a response happens only here.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use stockroom_core::CoreError;

/// API error returned to HTTP clients.
///
/// ## Serialization
/// ```json
/// { "code": "NOT_FOUND", "message": "Product not found: abc-123" }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Quantity to add was not strictly positive (400)
    InvalidQuantity,

    /// Removal would drive stock negative (400)
    InsufficientStock,

    /// Unexpected failure (500)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::UserNotFound(id) => ApiError::not_found("User", &id),
            CoreError::InsufficientStock { .. } => {
                ApiError::new(ErrorCode::InsufficientStock, err.to_string())
            }
            CoreError::InvalidQuantity { .. } => {
                ApiError::new(ErrorCode::InvalidQuantity, err.to_string())
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.code {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InvalidQuantity | ErrorCode::InsufficientStock => StatusCode::BAD_REQUEST,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}
