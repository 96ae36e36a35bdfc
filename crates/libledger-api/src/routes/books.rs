//! # Book Registration API
//!
//! Routes:
//! - POST /v1/books — Register a book and derive its ledger identifier
//!
//! Registration is stateless: the identifier is a pure function of the
//! book's durable fields, so re-registering the same edition always yields
//! the same id. The ledger core treats the id as an opaque string.

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use libledger_core::BookId;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

/// Build the books router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/books", post(register_book))
}

/// Request body for registering a book.
#[derive(Debug, Deserialize)]
pub struct RegisterBookRequest {
    pub title: String,
    pub author: String,
    pub publish_date: String,
    pub isbn: String,
}

/// A registered book with its derived identifier.
#[derive(Debug, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub publish_date: String,
    pub isbn: String,
}

/// POST /v1/books
async fn register_book(
    Json(req): Json<RegisterBookRequest>,
) -> Result<(StatusCode, Json<Book>), AppError> {
    if req.isbn.trim().is_empty() || req.publish_date.trim().is_empty() {
        return Err(AppError::Validation(
            "isbn and publish_date are required to derive a book id".to_string(),
        ));
    }

    let id = BookId::derive(&req.isbn, &req.publish_date)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    tracing::info!(book_id = %id, "book registered");
    Ok((
        StatusCode::CREATED,
        Json(Book {
            id,
            title: req.title,
            author: req.author,
            publish_date: req.publish_date,
            isbn: req.isbn,
        }),
    ))
}
