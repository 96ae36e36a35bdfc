//! # Checkout Events
//!
//! The payload carried by each ledger block: who checked out which book,
//! and when. Events carry no identity of their own; a block gives an event
//! its position in history.

use libledger_core::BookId;
use serde::{Deserialize, Serialize};

/// A single book-checkout event.
///
/// Immutable value data. The `book_id` is treated as an opaque identifier;
/// the ledger never re-derives or validates it. `checkout_date` is
/// caller-supplied calendar data (ISO 8601 recommended), distinct from the
/// block's own construction timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutEvent {
    /// Identifier of the checked-out book.
    pub book_id: BookId,
    /// The borrowing user.
    pub user: String,
    /// The checkout date as reported by the caller.
    pub checkout_date: String,
    /// True only for the synthetic genesis payload.
    pub is_genesis: bool,
}

impl CheckoutEvent {
    /// Create a checkout event for a real borrowing.
    pub fn new(book_id: BookId, user: impl Into<String>, checkout_date: impl Into<String>) -> Self {
        Self {
            book_id,
            user: user.into(),
            checkout_date: checkout_date.into(),
            is_genesis: false,
        }
    }

    /// The synthetic payload carried by the genesis block.
    pub fn genesis() -> Self {
        Self {
            book_id: BookId::new(""),
            user: String::new(),
            checkout_date: String::new(),
            is_genesis: true,
        }
    }
}
