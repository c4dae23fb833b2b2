//! Error mapping for HTTP failures and client construction.

mod support;

use std::time::Duration;

use regraph::{
    BatchCreateRequest, BatchRequest, ChatCompletionRequest, ClientConfig, DateRange,
    EmbeddingRequest, HardwareRentalRequest, ImageGenerationRequest, Message, ModelDeployRequest,
    ModelListQuery, ProviderRegistration, ReGraphClient, ReGraphError, Result, SpeechRequest,
    TrainingJobRequest,
};
use serde_json::json;
use support::client_for;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Calls every facade method once and collects the outcomes.
async fn call_every_method(client: &ReGraphClient) -> Vec<(&'static str, Result<()>)> {
    let mut outcomes: Vec<(&'static str, Result<()>)> = Vec::new();

    outcomes.push((
        "chat.completions.create",
        client
            .chat()
            .completions()
            .create(ChatCompletionRequest::new("gpt-5", vec![Message::user("Hi")]))
            .await
            .map(drop),
    ));
    outcomes.push((
        "embeddings.create",
        client
            .embeddings()
            .create(EmbeddingRequest::new("text-embedding-3-large", "Hi"))
            .await
            .map(drop),
    ));
    outcomes.push((
        "images.generate",
        client
            .images()
            .generate(ImageGenerationRequest::new("a fox"))
            .await
            .map(drop),
    ));
    outcomes.push((
        "audio.speech",
        client.audio().speech(SpeechRequest::new("Hi")).await.map(drop),
    ));
    outcomes.push((
        "models.list",
        client.models().list(ModelListQuery::new()).await.map(drop),
    ));
    outcomes.push((
        "models.deploy",
        client
            .models()
            .deploy(ModelDeployRequest::new("bot", "llama-3-8b"))
            .await
            .map(drop),
    ));
    outcomes.push((
        "training.jobs.create",
        client
            .training()
            .jobs()
            .create(TrainingJobRequest::new("llama-3-8b", "s3://data.jsonl"))
            .await
            .map(drop),
    ));
    outcomes.push((
        "training.jobs.get",
        client.training().jobs().get("ft-1").await.map(drop),
    ));
    outcomes.push((
        "training.jobs.list",
        client.training().jobs().list().await.map(drop),
    ));
    outcomes.push((
        "training.jobs.cancel",
        client.training().jobs().cancel("ft-1").await.map(drop),
    ));
    outcomes.push((
        "batch.create",
        client
            .batch()
            .create(BatchCreateRequest::new(vec![BatchRequest::new("gpt-5", "Hi")]))
            .await
            .map(drop),
    ));
    outcomes.push(("batch.get", client.batch().get("b-1").await.map(drop)));
    outcomes.push((
        "usage.get",
        client.usage().get(DateRange::new()).await.map(drop),
    ));
    outcomes.push(("devices.list", client.devices().list().await.map(drop)));
    outcomes.push(("status.get", client.status().get().await.map(drop)));
    outcomes.push((
        "provider.register",
        client
            .provider()
            .register(ProviderRegistration::new("rig", "gpu", 1))
            .await
            .map(drop),
    ));
    outcomes.push((
        "provider.earnings",
        client.provider().earnings(DateRange::new()).await.map(drop),
    ));
    outcomes.push((
        "hardware.rent",
        client
            .hardware()
            .rent(HardwareRentalRequest::new("a100"))
            .await
            .map(drop),
    ));

    outcomes
}

#[tokio::test]
async fn test_401_surfaces_authentication_error_everywhere() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"message": "Invalid API key provided", "type": "invalid_request_error"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let outcomes = call_every_method(&client).await;
    assert_eq!(outcomes.len(), 18);

    for (name, outcome) in outcomes {
        match outcome {
            Err(ReGraphError::Authentication {
                message,
                status_code,
                response,
            }) => {
                assert_eq!(message, "Invalid API key provided", "{}", name);
                assert_eq!(status_code, Some(401), "{}", name);
                assert!(response.is_some(), "{}", name);
            }
            other => panic!("{}: expected authentication error, got {:?}", name, other),
        }
    }
}

#[tokio::test]
async fn test_429_surfaces_rate_limit_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {"message": "Rate limit exceeded"}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).status().get().await.unwrap_err();
    assert!(err.is_rate_limit());
    assert_eq!(err.message(), "Rate limit exceeded");
    assert_eq!(err.status_code(), Some(429));
}

#[tokio::test]
async fn test_500_message_is_extracted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/inference"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": {"message": "boom"}})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .chat()
        .completions()
        .create(ChatCompletionRequest::new("gpt-5", vec![Message::user("Hi")]))
        .await
        .unwrap_err();

    match err {
        ReGraphError::Api {
            ref message,
            status_code,
            ref response,
        } => {
            assert_eq!(message, "boom");
            assert_eq!(status_code, Some(500));
            assert_eq!(response.as_ref(), Some(&json!({"error": {"message": "boom"}})));
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_plain_text_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/devices"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad gateway upstream"))
        .mount(&server)
        .await;

    let err = client_for(&server).devices().list().await.unwrap_err();
    assert_eq!(err.message(), "Bad gateway upstream");
    assert_eq!(err.status_code(), Some(502));
    assert!(err.response().is_none());
}

#[tokio::test]
async fn test_empty_error_body_uses_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/batch/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server).batch().get("missing").await.unwrap_err();
    assert!(matches!(err, ReGraphError::Api { .. }));
    assert_eq!(err.message(), "HTTP 404 Not Found");
}

#[tokio::test]
async fn test_timeout_is_reported_as_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "operational"}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = ReGraphClient::new(
        ClientConfig::new()
            .with_api_key("rg-test-key")
            .with_base_url(server.uri())
            .with_timeout(Duration::from_millis(200)),
    )
    .unwrap();

    let err = client.status().get().await.unwrap_err();
    assert!(matches!(err, ReGraphError::Api { status_code: None, .. }));
    assert_eq!(err.message(), "Request timeout");
}

#[tokio::test]
async fn test_connection_refused() {
    let client = ReGraphClient::new(
        ClientConfig::new()
            .with_api_key("rg-test-key")
            .with_base_url("http://127.0.0.1:1"),
    )
    .unwrap();

    let err = client.status().get().await.unwrap_err();
    assert!(matches!(err, ReGraphError::Api { status_code: None, .. }));
    assert!(err.message().starts_with("Connection error"));
}

#[test]
fn test_empty_api_key_fails_before_network() {
    let err = ReGraphClient::with_api_key("").unwrap_err();
    assert!(err.is_authentication());
    assert_eq!(err.message(), "API key is required");

    let err = ReGraphClient::new(ClientConfig::new()).unwrap_err();
    assert!(err.is_authentication());
}
