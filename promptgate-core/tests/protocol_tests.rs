//! Wire-shape tests for the protocol types

use promptgate_core::protocol::generate::{GenerateRequest, GenerateResponse};
use promptgate_core::protocol::types::{ChatRequest, ChatResponse, Message, MessageRole};
use serde_json::json;

#[test]
fn chat_request_serializes_to_openai_shape() {
    let request = ChatRequest::new("gpt-4o-mini", vec![Message::user("hello")])
        .with_temperature(0.5)
        .with_max_tokens(1024);

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({
            "model": "gpt-4o-mini",
            "messages": [{"role": "user", "content": "hello"}],
            "temperature": 0.5,
            "max_tokens": 1024
        })
    );
}

#[test]
fn chat_response_deserializes_from_openai_reply() {
    let body = json!({
        "id": "chatcmpl-abc123",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": "Hello there!"},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 9, "completion_tokens": 12, "total_tokens": 21}
    });

    let response: ChatResponse = serde_json::from_value(body).unwrap();
    assert_eq!(response.model, "gpt-4o-mini");
    assert_eq!(response.choices[0].message.role, MessageRole::Assistant);
    assert_eq!(response.first_content(), Some("Hello there!"));
    assert_eq!(response.usage.unwrap().total_tokens, 21);
}

#[test]
fn chat_response_tolerates_missing_usage() {
    let body = json!({
        "id": "chatcmpl-abc123",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "gpt-4o-mini",
        "choices": []
    });

    let response: ChatResponse = serde_json::from_value(body).unwrap();
    assert!(response.usage.is_none());
    assert_eq!(response.first_content(), None);
}

#[test]
fn generate_request_accepts_extra_and_missing_fields() {
    let request: GenerateRequest =
        serde_json::from_value(json!({"prompt": "hi", "unknown_field": true})).unwrap();
    assert_eq!(request.prompt, "hi");
    assert!(request.model.is_none());

    let request: GenerateRequest = serde_json::from_value(json!({})).unwrap();
    assert!(request.prompt.is_empty());
}

#[test]
fn generate_response_omits_empty_optionals() {
    let response = GenerateResponse {
        result: "hi".to_string(),
        model: "gpt-4o-mini".to_string(),
        usage: None,
        correlation_id: None,
    };

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value, json!({"result": "hi", "model": "gpt-4o-mini"}));
}

#[test]
fn generate_response_keeps_correlation_id() {
    let response = GenerateResponse {
        result: "hi".to_string(),
        model: "gpt-4o-mini".to_string(),
        usage: None,
        correlation_id: Some("abc".to_string()),
    };

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["correlation_id"], "abc");
}
