//! Integration tests for the lookup client against a mocked upstream.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use httpmock::prelude::*;
use url::Url;

use breachwatch_core::{BreachRecord, LookupClient, LookupFailure, LookupResult, validate};

const TIMEOUT: Duration = Duration::from_secs(5);

fn client_for(server: &MockServer) -> LookupClient {
    LookupClient::with_endpoint(Url::parse(&server.base_url()).unwrap())
}

#[tokio::test]
async fn clean_when_breach_list_is_empty() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v1/check-email/safe@example.com");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "breaches": [] }));
    });

    let email = validate("safe@example.com").unwrap();
    let result = client_for(&server).lookup(&email, TIMEOUT).await;

    assert_eq!(result, LookupResult::Clean);
    mock.assert();
}

#[tokio::test]
async fn breached_sources_keep_upstream_order() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/check-email/user@example.com");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "breaches": ["SiteA", "SiteB"] }));
    });

    let email = validate("user@example.com").unwrap();
    let result = client_for(&server).lookup(&email, TIMEOUT).await;

    assert_eq!(
        result,
        LookupResult::Breached {
            sources: vec![BreachRecord::new("SiteA"), BreachRecord::new("SiteB")],
        }
    );
}

#[tokio::test]
async fn breached_sources_flatten_nested_lists() {
    // The live API wraps the list in another array
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/check-email/user@example.com");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "breaches": [["SiteA", "SiteB", "SiteC"]] }));
    });

    let email = validate("user@example.com").unwrap();
    let result = client_for(&server).lookup(&email, TIMEOUT).await;

    assert_eq!(
        result,
        LookupResult::Breached {
            sources: vec![
                BreachRecord::new("SiteA"),
                BreachRecord::new("SiteB"),
                BreachRecord::new("SiteC"),
            ],
        }
    );
}

#[tokio::test]
async fn not_found_means_clean() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/check-email/safe@example.com");
        then.status(404)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "Error": "Not found" }));
    });

    let email = validate("safe@example.com").unwrap();
    let result = client_for(&server).lookup(&email, TIMEOUT).await;

    assert_eq!(result, LookupResult::Clean);
}

#[tokio::test]
async fn malformed_json_is_invalid_response() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/check-email/user@example.com");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("this is not json {");
    });

    let email = validate("user@example.com").unwrap();
    let result = client_for(&server).lookup(&email, TIMEOUT).await;

    assert_eq!(result, LookupResult::Failed(LookupFailure::InvalidResponse));
}

#[tokio::test]
async fn server_error_is_invalid_response() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/check-email/user@example.com");
        then.status(500).body("internal error");
    });

    let email = validate("user@example.com").unwrap();
    let result = client_for(&server).lookup(&email, TIMEOUT).await;

    assert_eq!(result, LookupResult::Failed(LookupFailure::InvalidResponse));
}

#[tokio::test]
async fn slow_upstream_is_timeout() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/check-email/user@example.com");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "breaches": [] }))
            .delay(Duration::from_millis(500));
    });

    let email = validate("user@example.com").unwrap();
    let result = client_for(&server)
        .lookup(&email, Duration::from_millis(50))
        .await;

    assert_eq!(result, LookupResult::Failed(LookupFailure::Timeout));
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    // Nothing listens on this port
    let endpoint = Url::parse("http://127.0.0.1:9").unwrap();
    let client = LookupClient::with_endpoint(endpoint);

    let email = validate("user@example.com").unwrap();
    let result = client.lookup(&email, TIMEOUT).await;

    assert_eq!(result, LookupResult::Failed(LookupFailure::NetworkError));
}

#[tokio::test]
async fn request_path_carries_encoded_email() {
    // A slash in the local part must not split the path
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v1/check-email/user%2Fx@example.com");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "breaches": [] }));
    });

    let email = validate("user/x@example.com").unwrap();
    let result = client_for(&server).lookup(&email, TIMEOUT).await;

    assert_eq!(result, LookupResult::Clean);
    mock.assert();
}
