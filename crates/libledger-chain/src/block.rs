//! # Ledger Blocks
//!
//! A block is one immutable, hash-committed ledger entry. Its `hash` field
//! is a SHA-256 commitment over the block's own content plus the
//! predecessor's hash, which is what makes retroactive edits detectable:
//! change any field of any historical block and its stored hash no longer
//! reproduces.
//!
//! ## Commitment Encoding
//!
//! The commitment input is a versioned record
//! `{v, position, timestamp, payload, previous_hash}` canonicalized through
//! [`CanonicalBytes`] before digesting. Every field is encoded explicitly,
//! never through ambient string conversion of integers or platform-dependent
//! time formats, so the same logical block hashes identically everywhere.

use libledger_core::{sha256_hex, CanonicalBytes, CanonicalizationError, Timestamp};
use serde::{Deserialize, Serialize};

use crate::error::ChainError;
use crate::event::CheckoutEvent;

/// Version tag for the commitment input encoding. Bumped if the encoding
/// ever changes, so old and new commitments can never collide silently.
const COMMITMENT_VERSION: u8 = 1;

/// The canonical commitment input for a block.
#[derive(Serialize)]
struct CommitmentInput<'a> {
    v: u8,
    position: u64,
    timestamp: Timestamp,
    payload: &'a CheckoutEvent,
    previous_hash: &'a str,
}

/// One entry in the checkout ledger, immutable once constructed.
///
/// Serde field order is part of the external contract: snapshots serialize
/// each block as `position, payload, timestamp, hash, previous_hash`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Index in the chain; strictly increases by 1 from the predecessor.
    pub position: u64,
    /// The checkout event this block commits to.
    pub payload: CheckoutEvent,
    /// Creation time, captured once at construction and never recomputed.
    pub timestamp: Timestamp,
    /// SHA-256 commitment over `(position, timestamp, payload, previous_hash)`,
    /// lowercase hex.
    pub hash: String,
    /// The predecessor block's `hash`; empty string only for genesis.
    pub previous_hash: String,
}

impl Block {
    /// Construct the genesis block: position 0, synthetic genesis payload,
    /// no predecessor.
    ///
    /// # Errors
    ///
    /// Fails only on canonicalization failure of the commitment input.
    pub fn genesis() -> Result<Self, ChainError> {
        Self::assemble(0, CheckoutEvent::genesis(), Timestamp::now(), String::new())
    }

    /// Construct the successor of `previous` carrying `payload`.
    ///
    /// Sets `position = previous.position + 1` (checked) and
    /// `previous_hash = previous.hash`, stamps the current time, then
    /// computes the commitment. The result satisfies its own commitment
    /// immediately; whether it links to the chain's actual tail is checked
    /// at append time.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::PositionExhausted`] if the position counter
    /// would overflow, or [`ChainError::Canonicalization`] if the commitment
    /// input cannot be serialized. Both are environment faults, not
    /// retryable with the same input.
    pub fn next(previous: &Block, payload: CheckoutEvent) -> Result<Self, ChainError> {
        let position = previous
            .position
            .checked_add(1)
            .ok_or(ChainError::PositionExhausted {
                position: previous.position,
            })?;
        Self::assemble(position, payload, Timestamp::now(), previous.hash.clone())
    }

    /// Recompute the commitment over the stored fields and compare with a
    /// claimed hash.
    ///
    /// Pure, no side effects. Returns `false` on any mismatch, including a
    /// commitment input that no longer canonicalizes. Never panics.
    pub fn verify_commitment(&self, claimed: &str) -> bool {
        match commitment_hash(
            self.position,
            self.timestamp,
            &self.payload,
            &self.previous_hash,
        ) {
            Ok(recomputed) => recomputed == claimed,
            Err(_) => false,
        }
    }

    /// Build a block from fully specified fields, computing its commitment.
    /// Crate-internal: append paths go through [`Block::next`].
    pub(crate) fn assemble(
        position: u64,
        payload: CheckoutEvent,
        timestamp: Timestamp,
        previous_hash: String,
    ) -> Result<Self, ChainError> {
        let hash = commitment_hash(position, timestamp, &payload, &previous_hash)?;
        Ok(Self {
            position,
            payload,
            timestamp,
            hash,
            previous_hash,
        })
    }
}

/// Compute the hex-encoded SHA-256 commitment for a block's fields.
fn commitment_hash(
    position: u64,
    timestamp: Timestamp,
    payload: &CheckoutEvent,
    previous_hash: &str,
) -> Result<String, CanonicalizationError> {
    let input = CommitmentInput {
        v: COMMITMENT_VERSION,
        position,
        timestamp,
        payload,
        previous_hash,
    };
    let canonical = CanonicalBytes::new(&input)?;
    Ok(sha256_hex(&canonical))
}
