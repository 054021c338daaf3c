//! Delegate strategy against a mocked OpenAI chat-completion endpoint.

use litvinovgpt::event::{Event, Response};
use litvinovgpt::handle_event;
use litvinovgpt::reply::{DelegateStrategy, MAX_TOKENS, OPENAI_MODEL, ReplyStrategy, SYSTEM_PROMPT};
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn completion_response(content: &str) -> Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1677652288,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 9, "completion_tokens": 12, "total_tokens": 21 }
    })
}

fn delegate(server: &MockServer) -> ReplyStrategy {
    ReplyStrategy::Delegate(DelegateStrategy::new(
        Some("test-api-key".to_string()),
        server.uri(),
    ))
}

fn body_json(response: &Response) -> Value {
    serde_json::from_str(&response.body).expect("response body is JSON")
}

fn chat_event(history_len: usize) -> Event {
    let history: Vec<Value> = (0..history_len)
        .map(|i| {
            json!({
                "sender": if i % 2 == 0 { "user" } else { "bot" },
                "text": format!("turn {i}"),
            })
        })
        .collect();
    let body = json!({ "message": "  Что нового?  ", "history": history });
    Event::new("POST", body.to_string())
}

#[tokio::test]
async fn forwards_trimmed_history_and_returns_reply() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_response("Всё отлично!")))
        .expect(1)
        .mount(&server)
        .await;

    let response = handle_event(&chat_event(15), &delegate(&server)).await;
    assert_eq!(response.status_code, 200);

    let body = body_json(&response);
    assert_eq!(body, json!({ "reply": "Всё отлично!", "model": OPENAI_MODEL }));

    let requests = server.received_requests().await.expect("requests");
    assert_eq!(requests.len(), 1);
    let sent: Value = requests[0].body_json().expect("request body");

    assert_eq!(sent["model"], OPENAI_MODEL);
    assert_eq!(sent["max_tokens"], MAX_TOKENS);
    assert_eq!(sent["temperature"], 0.7);

    let messages = sent["messages"].as_array().expect("messages array");
    assert_eq!(messages.len(), 12);
    assert_eq!(messages[0], json!({ "role": "system", "content": SYSTEM_PROMPT }));
    for (offset, message) in messages[1..11].iter().enumerate() {
        let turn = offset + 5;
        let role = if turn % 2 == 0 { "user" } else { "assistant" };
        assert_eq!(
            message,
            &json!({ "role": role, "content": format!("turn {turn}") })
        );
    }
    assert_eq!(messages[11], json!({ "role": "user", "content": "Что нового?" }));
}

#[tokio::test]
async fn upstream_error_becomes_processing_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "message": "Incorrect API key provided",
                "type": "invalid_request_error",
                "param": null,
                "code": "invalid_api_key"
            }
        })))
        .mount(&server)
        .await;

    let response = handle_event(&chat_event(0), &delegate(&server)).await;
    assert_eq!(response.status_code, 500);

    let error = body_json(&response)["error"]
        .as_str()
        .expect("error text")
        .to_string();
    assert!(error.starts_with("Ошибка обработки: "));
    assert!(error.contains("Incorrect API key provided"));
}

#[tokio::test]
async fn empty_choices_becomes_processing_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let response = handle_event(&chat_event(3), &delegate(&server)).await;
    assert_eq!(response.status_code, 500);
    assert_eq!(
        body_json(&response)["error"],
        "Ошибка обработки: OpenAI response error: No choices in response"
    );
}

#[tokio::test]
async fn missing_key_never_reaches_the_api() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_response("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let strategy = ReplyStrategy::Delegate(DelegateStrategy::new(None, server.uri()));
    let response = handle_event(&chat_event(2), &strategy).await;
    assert_eq!(response.status_code, 500);
    assert_eq!(body_json(&response)["error"], "OpenAI API ключ не настроен");
}

#[tokio::test]
async fn blank_message_never_reaches_the_api() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_response("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let event = Event::new("POST", json!({ "message": "   " }).to_string());
    let response = handle_event(&event, &delegate(&server)).await;
    assert_eq!(response.status_code, 400);
}
