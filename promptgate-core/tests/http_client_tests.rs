//! HTTP client tests against a wiremock upstream

use promptgate_core::config::SecretString;
use promptgate_core::http::client::HttpClient;
use promptgate_core::http::{CallKind, HttpExecutor, RequestOptions};
use promptgate_core::protocol::types::{ChatRequest, Message};
use promptgate_core::providers::{OpenAiProvider, ProviderError};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_request() -> ChatRequest {
    ChatRequest::new("test-model", vec![Message::user("Test message")])
        .with_temperature(0.7)
        .with_max_tokens(100)
}

fn success_body() -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "created": 1234567890,
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": "Test response"},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 3, "completion_tokens": 5, "total_tokens": 8}
    })
}

fn client() -> HttpClient {
    HttpClient::new(SecretString::new("sk-test")).unwrap()
}

#[tokio::test]
async fn successful_call_hits_upstream_exactly_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({"model": "test-model"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .expect(1)
        .mount(&server)
        .await;

    let provider = OpenAiProvider::with_base_url(server.uri());
    let response = client()
        .execute_json(&provider, test_request(), RequestOptions::new(CallKind::Chat))
        .await
        .unwrap();

    assert_eq!(response.first_content(), Some("Test response"));
    assert_eq!(response.usage.unwrap().total_tokens, 8);
}

#[tokio::test]
async fn request_carries_correlation_header() {
    let server = MockServer::start().await;
    let options = RequestOptions::new(CallKind::Chat);
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("X-Request-ID", options.request_id.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .expect(1)
        .mount(&server)
        .await;

    let provider = OpenAiProvider::with_base_url(server.uri());
    client()
        .execute_json(&provider, test_request(), options)
        .await
        .unwrap();
}

#[tokio::test]
async fn unauthorized_maps_to_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"message": "Incorrect API key provided"}
        })))
        .mount(&server)
        .await;

    let provider = OpenAiProvider::with_base_url(server.uri());
    let err = client()
        .execute_json(&provider, test_request(), RequestOptions::new(CallKind::Chat))
        .await
        .unwrap_err();

    match err {
        ProviderError::Authentication(message) => {
            assert!(message.contains("Incorrect API key"));
        }
        other => panic!("expected Authentication, got {:?}", other),
    }
}

#[tokio::test]
async fn rate_limit_parses_retry_after_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "7")
                .set_body_json(json!({"error": {"message": "Rate limit reached"}})),
        )
        .mount(&server)
        .await;

    let provider = OpenAiProvider::with_base_url(server.uri());
    let err = client()
        .execute_json(&provider, test_request(), RequestOptions::new(CallKind::Chat))
        .await
        .unwrap_err();

    match err {
        ProviderError::RateLimit { retry_after } => {
            assert_eq!(retry_after, Some(Duration::from_secs(7)));
        }
        other => panic!("expected RateLimit, got {:?}", other),
    }
}

#[tokio::test]
async fn server_error_maps_to_server_variant() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let provider = OpenAiProvider::with_base_url(server.uri());
    let err = client()
        .execute_json(&provider, test_request(), RequestOptions::new(CallKind::Chat))
        .await
        .unwrap_err();

    match err {
        ProviderError::Server { status, .. } => assert_eq!(status, 500),
        other => panic!("expected Server, got {:?}", other),
    }
    assert!(err.is_retryable());
}

#[tokio::test]
async fn slow_upstream_maps_to_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success_body())
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let provider = OpenAiProvider::with_base_url(server.uri());
    let options = RequestOptions::new(CallKind::Chat).with_timeout(Duration::from_millis(100));
    let err = client()
        .execute_json(&provider, test_request(), options)
        .await
        .unwrap_err();

    assert!(err.is_timeout(), "expected timeout, got {:?}", err);
}

#[tokio::test]
async fn upstream_gateway_timeout_reports_configured_deadline() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(504))
        .mount(&server)
        .await;

    let provider = OpenAiProvider::with_base_url(server.uri());
    let options = RequestOptions::new(CallKind::Chat).with_timeout(Duration::from_secs(5));
    let err = client()
        .execute_json(&provider, test_request(), options)
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Timeout(5)));
    assert_eq!(err.to_string(), "request timed out after 5 seconds");
}

#[tokio::test]
async fn non_json_content_type_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string("<html>not an api</html>"),
        )
        .mount(&server)
        .await;

    let provider = OpenAiProvider::with_base_url(server.uri());
    let err = client()
        .execute_json(&provider, test_request(), RequestOptions::new(CallKind::Chat))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Parse(_)));
}

#[tokio::test]
async fn malformed_json_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string("{\"id\": \"truncated"),
        )
        .mount(&server)
        .await;

    let provider = OpenAiProvider::with_base_url(server.uri());
    let err = client()
        .execute_json(&provider, test_request(), RequestOptions::new(CallKind::Chat))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Parse(_)));
}
