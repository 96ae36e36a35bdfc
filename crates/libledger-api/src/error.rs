//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps ledger rejections to HTTP status codes and JSON error bodies.
//! Internal error details are never exposed in responses. Corruption
//! findings are: an auditor must see them.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use libledger_chain::ChainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured JSON error response body.
///
/// All error responses use this format for consistency across the API
/// surface.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "CONFLICT", "VALIDATION_ERROR").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request validation failed (422).
    #[error("validation error: {0}")]
    Validation(String),

    /// Append rejected against the current tail (409). Retryable: the
    /// caller should re-read the tail and resubmit.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The stored ledger failed an integrity check (500). Not retryable;
    /// surfaced verbatim because it is an audit finding, not an internal
    /// detail.
    #[error("ledger corrupted: {0}")]
    Corruption(String),

    /// Internal server error (500). Message is logged but not returned to
    /// the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            Self::Corruption(_) => (StatusCode::INTERNAL_SERVER_ERROR, "LEDGER_CORRUPTED"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Never expose internal error messages to clients; corruption
        // findings are deliberately kept visible.
        let message = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        match &self {
            Self::Internal(_) => tracing::error!(error = %self, "internal server error"),
            Self::Corruption(_) => tracing::error!(error = %self, "ledger corruption detected"),
            _ => {}
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Map ledger rejections to HTTP semantics: stale-tail races are conflicts
/// the caller can retry, integrity failures are corruption, and
/// environment faults stay internal.
impl From<ChainError> for AppError {
    fn from(err: ChainError) -> Self {
        match &err {
            ChainError::LinkageViolation { .. } | ChainError::SequenceViolation { .. } => {
                Self::Conflict(err.to_string())
            }
            ChainError::IntegrityViolation { .. } => Self::Corruption(err.to_string()),
            ChainError::PositionExhausted { .. } | ChainError::Canonicalization(_) => {
                Self::Internal(err.to_string())
            }
        }
    }
}
