//! # Chain Error Taxonomy
//!
//! Typed rejection reasons for ledger operations. A rejected append is
//! always surfaced to the caller as one of these variants, never silently
//! discarded: linkage and sequence violations are expected under concurrent
//! load and tell the caller to re-read the tail and retry, while an
//! integrity violation means the block content no longer matches its stored
//! commitment and must be treated as ledger corruption.

use libledger_core::CanonicalizationError;
use thiserror::Error;

/// Errors raised by block construction, append validation, and chain audit.
#[derive(Error, Debug)]
pub enum ChainError {
    /// Candidate's previous-hash does not match the current tail.
    /// Indicates a stale read or a concurrent-append race; retryable.
    #[error(
        "linkage violation at position {position}: candidate previous_hash {candidate} does not match tail hash {tail}"
    )]
    LinkageViolation {
        /// The candidate's claimed position.
        position: u64,
        /// The candidate's previous-hash field.
        candidate: String,
        /// The actual hash of the tail block.
        tail: String,
    },

    /// A block's stored hash does not match its recomputed commitment.
    /// Never expected for chain-internal candidates; when observed during an
    /// audit it means the stored history has been altered.
    #[error("integrity violation at position {position}: stored hash does not match recomputed commitment")]
    IntegrityViolation {
        /// Position of the corrupt block.
        position: u64,
    },

    /// Candidate's position is not exactly tail position + 1.
    #[error("sequence violation: expected position {expected}, got {actual}")]
    SequenceViolation {
        /// The required next position.
        expected: u64,
        /// The position the candidate carried.
        actual: u64,
    },

    /// The fixed-width position counter cannot be advanced further.
    #[error("position counter exhausted at {position}")]
    PositionExhausted {
        /// The tail position that could not be incremented.
        position: u64,
    },

    /// Commitment input could not be canonicalized. An environment failure:
    /// fatal to the operation, not retried, and not chain-state corruption.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),
}
