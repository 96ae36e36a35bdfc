//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor.
//!
//! The ledger is the only shared mutable state. It is guarded by a single
//! `parking_lot::Mutex` so that "read tail → build candidate → validate →
//! append" executes as one atomic unit; two racing appends serialize and
//! both commit with consecutive positions. All lock operations are
//! synchronous (`parking_lot`, not `tokio::sync`) because the lock is never
//! held across an `.await` point. `parking_lot` mutexes do not poison, so a
//! panicking handler cannot permanently wedge the ledger.

use std::sync::Arc;

use libledger_chain::{Chain, ChainError};
use parking_lot::Mutex;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

/// Shared application state accessible to all route handlers.
///
/// Clone-friendly: clones share the same underlying ledger through the
/// `Arc`. The raw `Chain` is never exposed for direct external mutation;
/// handlers go through the lock and the chain's own validated operations.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The in-memory checkout ledger. Lives for the process lifetime;
    /// restarting the process loses all history.
    pub ledger: Arc<Mutex<Chain>>,
    pub config: AppConfig,
}

impl AppState {
    /// Create application state with default configuration.
    ///
    /// # Panics
    ///
    /// Panics if genesis initialization fails. Prefer [`AppState::try_new`]
    /// outside tests.
    pub fn new() -> Self {
        Self::try_new().expect("failed to initialize checkout ledger")
    }

    /// Create application state with default configuration, returning `Err`
    /// if genesis initialization fails.
    pub fn try_new() -> Result<Self, ChainError> {
        Self::try_with_config(AppConfig::default())
    }

    /// Create application state with the given configuration.
    pub fn try_with_config(config: AppConfig) -> Result<Self, ChainError> {
        Ok(Self {
            ledger: Arc::new(Mutex::new(Chain::genesis()?)),
            config,
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
