//! # Ledger API
//!
//! Routes:
//! - POST /v1/ledger/checkouts — Commit a checkout event to the ledger
//! - GET  /v1/ledger — Full chain snapshot, genesis first
//! - GET  /v1/ledger/verify — Full-chain integrity audit

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use libledger_chain::{Block, CheckoutEvent};
use libledger_core::BookId;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

/// Build the ledger router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/ledger", get(snapshot))
        .route("/v1/ledger/checkouts", post(append_checkout))
        .route("/v1/ledger/verify", get(verify))
}

/// Request body for committing a checkout.
///
/// `is_genesis` is not accepted from callers; only the ledger itself
/// creates the genesis payload.
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub book_id: String,
    pub user: String,
    pub checkout_date: String,
}

/// POST /v1/ledger/checkouts
///
/// Appends the event to the chain and returns the committed block, or a
/// typed rejection. The whole read-validate-append sequence runs under the
/// ledger lock, so racing requests serialize and both commit in order.
async fn append_checkout(
    State(state): State<AppState>,
    Json(req): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<Block>), AppError> {
    if req.book_id.trim().is_empty() {
        return Err(AppError::Validation("book_id must not be empty".to_string()));
    }
    if req.user.trim().is_empty() {
        return Err(AppError::Validation("user must not be empty".to_string()));
    }

    let event = CheckoutEvent::new(BookId::new(req.book_id), req.user, req.checkout_date);
    let block = state.ledger.lock().append(event)?;

    tracing::info!(position = block.position, hash = %block.hash, "checkout committed");
    Ok((StatusCode::CREATED, Json(block)))
}

/// GET /v1/ledger
///
/// Returns the full chain in position order. Each block serializes with
/// its five fields in the order `position, payload, timestamp, hash,
/// previous_hash`, the external contract existing consumers rely on.
async fn snapshot(State(state): State<AppState>) -> Json<Vec<Block>> {
    Json(state.ledger.lock().snapshot())
}

/// Audit report for the full chain.
#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyResponse {
    /// True when every block's commitment and linkage verified.
    pub valid: bool,
    /// Number of blocks audited.
    pub height: u64,
    /// The first violation found, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /v1/ledger/verify
///
/// Re-walks the chain from genesis. A failed audit is reported in the
/// body (and logged as corruption), not collapsed into an HTTP error:
/// the report itself is the resource being requested.
async fn verify(State(state): State<AppState>) -> Json<VerifyResponse> {
    let ledger = state.ledger.lock();
    let height = ledger.height();
    match ledger.verify() {
        Ok(()) => Json(VerifyResponse {
            valid: true,
            height,
            error: None,
        }),
        Err(err) => {
            tracing::error!(error = %err, "ledger audit failed");
            Json(VerifyResponse {
                valid: false,
                height,
                error: Some(err.to_string()),
            })
        }
    }
}
