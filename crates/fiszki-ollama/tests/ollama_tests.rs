use std::time::Duration;

use fiszki_core::{ModelProvider, ProviderError};
use fiszki_ollama::OllamaProvider;
use fiszki_types::ChatMessage;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage::system("make flashcards"),
        ChatMessage::user("1. What is X? - Y.\n\n/nothink"),
    ]
}

fn provider(server: &MockServer) -> OllamaProvider {
    OllamaProvider::new(format!("{}/", server.uri()), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_chat_returns_message_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({
            "model": "qwen3:8b",
            "stream": false,
            "messages": [
                {"role": "system", "content": "make flashcards"},
                {"role": "user", "content": "1. What is X? - Y.\n\n/nothink"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "qwen3:8b",
            "message": {"role": "assistant", "content": "[{\"front\":\"What is X?\",\"back\":\"Y.\",\"category\":\"General\"}]"},
            "done": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = provider(&server)
        .chat("qwen3:8b", &messages())
        .await
        .unwrap();

    assert!(text.contains("What is X?"));
}

#[tokio::test]
async fn test_missing_message_is_empty_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"done": true})))
        .mount(&server)
        .await;

    let text = provider(&server).chat("qwen3:8b", &messages()).await.unwrap();
    assert_eq!(text, "");
}

#[tokio::test]
async fn test_unknown_model_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "model 'nope' not found"})),
        )
        .mount(&server)
        .await;

    let err = provider(&server).chat("nope", &messages()).await.unwrap_err();
    assert!(matches!(err, ProviderError::ModelNotFound(model) if model == "nope"));
}

#[tokio::test]
async fn test_server_error_carries_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("out of memory"))
        .mount(&server)
        .await;

    let err = provider(&server).chat("qwen3:8b", &messages()).await.unwrap_err();
    match err {
        ProviderError::ApiError(message) => {
            assert!(message.contains("500"));
            assert!(message.contains("out of memory"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_field_in_ok_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "model is loading"})))
        .mount(&server)
        .await;

    let err = provider(&server).chat("qwen3:8b", &messages()).await.unwrap_err();
    assert!(matches!(err, ProviderError::ApiError(message) if message == "model is loading"));
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": {"content": "late"}}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let provider = OllamaProvider::new(server.uri(), Duration::from_millis(200)).unwrap();
    let err = provider.chat("qwen3:8b", &messages()).await.unwrap_err();
    assert!(matches!(err, ProviderError::Timeout));
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let provider =
        OllamaProvider::new("http://127.0.0.1:9".to_string(), Duration::from_secs(2)).unwrap();
    let err = provider.chat("qwen3:8b", &messages()).await.unwrap_err();
    assert!(matches!(err, ProviderError::NetworkError(_)));
}

#[test]
fn test_metadata_strips_trailing_slash() {
    let provider =
        OllamaProvider::new("http://localhost:11434/".to_string(), Duration::from_secs(1)).unwrap();
    let metadata = provider.metadata();
    assert_eq!(metadata.name, "ollama");
    assert_eq!(metadata.host, "http://localhost:11434");
}
