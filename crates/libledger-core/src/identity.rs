//! # Identity Newtypes
//!
//! Identifier types for the ledger. A [`BookId`] is a distinct type rather
//! than a bare string, so a book identifier cannot be confused with a user
//! name or a block hash at a call site.

use serde::{Deserialize, Serialize};

use crate::canonical::CanonicalBytes;
use crate::digest::sha256_hex;
use crate::error::CanonicalizationError;

/// An opaque identifier for a registered book.
///
/// Canonically derived from the book's durable fields via [`BookId::derive`],
/// but the ledger accepts any caller-supplied value: checkout events carry
/// the id as opaque data and never re-derive or validate it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    /// Derive a book identifier from its durable fields.
    ///
    /// The id is the content digest of `(isbn, publish_date)` through the
    /// canonical pipeline, so the same edition always derives the same id.
    pub fn derive(isbn: &str, publish_date: &str) -> Result<Self, CanonicalizationError> {
        let canonical = CanonicalBytes::new(&serde_json::json!({
            "isbn": isbn,
            "publish_date": publish_date,
        }))?;
        Ok(Self(sha256_hex(&canonical)))
    }

    /// Wrap an existing identifier string without validation.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
