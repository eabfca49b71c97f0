//! Rate limit (429) retry behavior tests.
//!
//! # Invariants
//! - 429 responses are retried, honoring Retry-After when present
//! - Other error statuses fail on the first attempt

mod common;

use common::*;
use notebook_client::ClientError;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_retry_on_429_success() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("notebooks/get_notebook.json");

    Mock::given(method("GET"))
        .and(path("/api/v1/notebooks/126879"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "0")
                .set_body_json(serde_json::json!({"errors": ["Rate limit exceeded"]})),
        )
        .up_to_n_times(2)
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/notebooks/126879"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result =
        endpoints::get_notebook(&client, &mock_server.uri(), &test_keys(), 126879, 3).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_retry_on_429_exhaustion() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/notebooks/5"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::delete_notebook(&client, &mock_server.uri(), &test_keys(), 5, 2)
        .await
        .unwrap_err();

    // 2 retries + 1 initial attempt = 3 total
    assert!(matches!(err, ClientError::MaxRetriesExceeded(3)));
}

#[tokio::test]
async fn test_no_retry_when_max_retries_zero() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/notebooks/5"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::delete_notebook(&client, &mock_server.uri(), &test_keys(), 5, 0)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::MaxRetriesExceeded(1)));
}

#[tokio::test]
async fn test_server_error_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/notebooks/9"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal failure"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::get_notebook(&client, &mock_server.uri(), &test_keys(), 9, 3)
        .await
        .unwrap_err();

    match err {
        ClientError::ApiError { status, message, .. } => {
            assert_eq!(status, 500);
            assert_eq!(message, "internal failure");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}
