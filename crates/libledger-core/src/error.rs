//! # Error Types
//!
//! Error types shared across the libledger workspace. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.

use thiserror::Error;

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    /// They have non-deterministic serialization edge cases that would make
    /// the same logical value hash differently across platforms.
    #[error("float values are not permitted in canonical representations: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Error constructing or parsing a [`crate::Timestamp`].
#[derive(Error, Debug)]
pub enum TimestampError {
    /// The input did not use the `Z` suffix required for UTC-only timestamps.
    #[error("timestamp must use Z suffix (UTC only), got: {0:?}")]
    NonUtc(String),

    /// The input was not a valid RFC 3339 timestamp.
    #[error("invalid RFC 3339 timestamp {input:?}: {message}")]
    Invalid {
        /// The rejected input string.
        input: String,
        /// The parser's description of the failure.
        message: String,
    },
}
