//! # Integration Tests for libledger-api
//!
//! Exercises the HTTP surface end to end: health probes, checkout commits,
//! snapshot ordering and field order, the integrity audit, book
//! registration, and error body shapes.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use libledger_api::AppState;

/// Helper: build the test app.
fn test_app() -> axum::Router {
    libledger_api::app(AppState::new())
}

/// Helper: read response body as string.
async fn body_string(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Helper: read response body as JSON.
async fn body_json(response: axum::http::Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Helper: POST a checkout event.
fn checkout_request(book_id: &str, user: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/ledger/checkouts")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&serde_json::json!({
                "book_id": book_id,
                "user": user,
                "checkout_date": "2024-01-01"
            }))
            .unwrap(),
        ))
        .unwrap()
}

// -- Health Probes ------------------------------------------------------------

#[tokio::test]
async fn test_liveness_probe() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health/liveness")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn test_readiness_probe() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health/readiness")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ready");
}

// -- Checkout Commits ---------------------------------------------------------

#[tokio::test]
async fn test_commit_checkout_returns_committed_block() {
    let app = test_app();

    let response = app.oneshot(checkout_request("b1", "alice")).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let block = body_json(response).await;
    assert_eq!(block["position"], 1);
    assert_eq!(block["payload"]["book_id"], "b1");
    assert_eq!(block["payload"]["user"], "alice");
    assert_eq!(block["payload"]["is_genesis"], false);
    assert_eq!(block["hash"].as_str().unwrap().len(), 64);
    assert_eq!(block["previous_hash"].as_str().unwrap().len(), 64);
}

#[tokio::test]
async fn test_sequential_commits_link_correctly() {
    let app = test_app();

    let first = body_json(
        app.clone()
            .oneshot(checkout_request("b1", "alice"))
            .await
            .unwrap(),
    )
    .await;
    let second = body_json(
        app.clone()
            .oneshot(checkout_request("b2", "bob"))
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(first["position"], 1);
    assert_eq!(second["position"], 2);
    assert_eq!(second["previous_hash"], first["hash"]);
}

#[tokio::test]
async fn test_commit_rejects_empty_user() {
    let response = test_app()
        .oneshot(checkout_request("b1", ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("user"));
}

#[tokio::test]
async fn test_commit_rejects_empty_book_id() {
    let response = test_app()
        .oneshot(checkout_request("", "alice"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

// -- Snapshot -----------------------------------------------------------------

#[tokio::test]
async fn test_snapshot_starts_with_genesis() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/v1/ledger")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let blocks = body_json(response).await;
    let blocks = blocks.as_array().unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0]["position"], 0);
    assert_eq!(blocks[0]["previous_hash"], "");
    assert_eq!(blocks[0]["payload"]["is_genesis"], true);
}

#[tokio::test]
async fn test_snapshot_is_ordered_and_linked() {
    let app = test_app();
    for (book, user) in [("b1", "alice"), ("b2", "bob"), ("b3", "carol")] {
        let response = app.clone().oneshot(checkout_request(book, user)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/ledger")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let blocks = body_json(response).await;
    let blocks = blocks.as_array().unwrap();

    assert_eq!(blocks.len(), 4);
    for (i, pair) in blocks.windows(2).enumerate() {
        assert_eq!(pair[1]["position"], (i + 1) as u64);
        assert_eq!(pair[1]["previous_hash"], pair[0]["hash"]);
    }
}

#[tokio::test]
async fn test_snapshot_block_field_order() {
    // The five block fields must serialize in this exact order for
    // compatibility with existing consumers.
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/v1/ledger")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let raw = body_string(response).await;

    let indices: Vec<usize> = ["\"position\"", "\"payload\"", "\"timestamp\"", "\"hash\"", "\"previous_hash\""]
        .iter()
        .map(|field| raw.find(field).unwrap())
        .collect();
    let mut sorted = indices.clone();
    sorted.sort_unstable();
    assert_eq!(indices, sorted, "field order drifted in: {raw}");
}

// -- Integrity Audit ----------------------------------------------------------

#[tokio::test]
async fn test_verify_reports_valid_chain() {
    let app = test_app();
    for i in 0..3 {
        app.clone()
            .oneshot(checkout_request(&format!("b{i}"), "alice"))
            .await
            .unwrap();
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/ledger/verify")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let report = body_json(response).await;
    assert_eq!(report["valid"], true);
    assert_eq!(report["height"], 4);
    assert!(report.get("error").is_none());
}

// -- Book Registration --------------------------------------------------------

fn register_book_request(isbn: &str, publish_date: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/books")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&serde_json::json!({
                "title": "The Left Hand of Darkness",
                "author": "Ursula K. Le Guin",
                "publish_date": publish_date,
                "isbn": isbn
            }))
            .unwrap(),
        ))
        .unwrap()
}

#[tokio::test]
async fn test_register_book_derives_id() {
    let response = test_app()
        .oneshot(register_book_request("978-0-441-47812-5", "1969-03-01"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let book = body_json(response).await;
    let id = book["id"].as_str().unwrap();
    assert_eq!(id.len(), 64);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(book["isbn"], "978-0-441-47812-5");
}

#[tokio::test]
async fn test_register_same_edition_twice_same_id() {
    let app = test_app();
    let first = body_json(
        app.clone()
            .oneshot(register_book_request("978-0-441-47812-5", "1969-03-01"))
            .await
            .unwrap(),
    )
    .await;
    let second = body_json(
        app.oneshot(register_book_request("978-0-441-47812-5", "1969-03-01"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(first["id"], second["id"]);
}

#[tokio::test]
async fn test_register_book_requires_isbn() {
    let response = test_app()
        .oneshot(register_book_request("", "1969-03-01"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

// -- Concurrent Commits -------------------------------------------------------

#[tokio::test]
async fn test_concurrent_commits_produce_unique_positions() {
    let app = test_app();

    let mut handles = Vec::new();
    for i in 0..10 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            let response = app
                .oneshot(checkout_request(&format!("b{i}"), "alice"))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
            body_json(response).await["position"].as_u64().unwrap()
        }));
    }

    let mut positions = Vec::new();
    for handle in handles {
        positions.push(handle.await.unwrap());
    }
    positions.sort_unstable();
    positions.dedup();
    assert_eq!(positions.len(), 10, "every commit got a distinct position");

    let report = body_json(
        app.oneshot(
            Request::builder()
                .uri("/v1/ledger/verify")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap(),
    )
    .await;
    assert_eq!(report["valid"], true);
    assert_eq!(report["height"], 11);
}
