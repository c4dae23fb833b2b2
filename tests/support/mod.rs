//! Shared helpers for the mock API tests.

#![allow(dead_code)]

use regraph::{ClientConfig, ReGraphClient};
use serde_json::Value;
use wiremock::MockServer;

pub const API_KEY: &str = "rg-test-key";

pub fn client_for(server: &MockServer) -> ReGraphClient {
    ReGraphClient::new(
        ClientConfig::new()
            .with_api_key(API_KEY)
            .with_base_url(server.uri()),
    )
    .expect("client")
}

/// JSON body of the single request the server received.
pub async fn only_request_body(server: &MockServer) -> Value {
    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    serde_json::from_slice(&requests[0].body).expect("json body")
}

pub async fn only_request_query(server: &MockServer) -> Option<String> {
    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests[0].url.query().map(str::to_string)
}
