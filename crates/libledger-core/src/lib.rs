//! # libledger-core — Foundational Types
//!
//! The bedrock of the libledger workspace. Defines the type-system
//! primitives that enforce commitment correctness at compile time; every
//! other crate in the workspace depends on it, and it depends on nothing
//! internal.
//!
//! ## Key Design Principles
//!
//! 1. **`CanonicalBytes` newtype.** ALL digest computation flows through
//!    `CanonicalBytes::new()`. No raw `serde_json::to_vec()` for digests.
//!    The same logical block therefore always hashes identically, on every
//!    platform.
//!
//! 2. **`sha256_hex()` accepts only `&CanonicalBytes`.** Compile-time
//!    enforcement that every digest path is canonical.
//!
//! 3. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision, matching the canonicalization rules.
//!
//! 4. **Newtype identifiers.** `BookId` is a distinct type with a
//!    content-derived constructor, not a bare string.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `libledger-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, sha256_hex, ContentDigest};
pub use error::{CanonicalizationError, TimestampError};
pub use identity::BookId;
pub use temporal::Timestamp;
