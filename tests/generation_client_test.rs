//! Integration tests for the generation server client.

use grimoire::infrastructure::ollama::OllamaClient;
use grimoire::{GenerationClient, RagError};
use mockito::{Matcher, Server};

#[tokio::test]
async fn generate_posts_non_streaming_request_and_returns_response() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/generate")
        .match_body(Matcher::Json(serde_json::json!({
            "model": "llama3.2:1b",
            "prompt": "say hello",
            "stream": false
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"response": "hello there", "done": true}"#)
        .create_async()
        .await;

    let client = OllamaClient::new(reqwest::Client::new(), server.url(), "llama3.2:1b");
    let response = client.generate("say hello").await.expect("generate");

    assert_eq!(response, "hello there");
    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_is_a_generation_service_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/generate")
        .with_status(500)
        .with_body("model not loaded")
        .create_async()
        .await;

    let client = OllamaClient::new(reqwest::Client::new(), server.url(), "llama3.2:1b");
    let err = client.generate("anything").await.expect_err("must fail");

    assert!(matches!(err, RagError::GenerationService(_)));
}

#[tokio::test]
async fn transport_failure_is_a_generation_service_error() {
    let client = OllamaClient::new(reqwest::Client::new(), "http://127.0.0.1:1", "llama3.2:1b");

    let err = client.generate("anything").await.expect_err("must fail");

    assert!(matches!(err, RagError::GenerationService(_)));
}
