//! # libledger-api — Axum HTTP Service
//!
//! The HTTP surface of the checkout ledger. Thin request/response
//! marshaling only: handlers delegate to `libledger-chain` and map its
//! typed rejections to HTTP semantics via [`AppError`].
//!
//! ## API Surface
//!
//! | Route                      | Module              | Operation            |
//! |----------------------------|---------------------|----------------------|
//! | `POST /v1/ledger/checkouts`| [`routes::ledger`]  | Commit a checkout    |
//! | `GET  /v1/ledger`          | [`routes::ledger`]  | Full chain snapshot  |
//! | `GET  /v1/ledger/verify`   | [`routes::ledger`]  | Integrity audit      |
//! | `POST /v1/books`           | [`routes::books`]   | Register a book      |
//! | `GET  /health/*`           | `lib.rs`            | Health probes        |

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Assemble the full application router with all routes and middleware.
///
/// Health probes are mounted outside the traced API router so probe spam
/// stays out of request traces.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::ledger::router())
        .merge(routes::books::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
