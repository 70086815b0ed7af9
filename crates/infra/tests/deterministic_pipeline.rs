//! End-to-end extraction in deterministic mode, with and without a queue.

use std::sync::Arc;

use meetline_core::ExtractionService;
use meetline_domain::{EventKind, InvokerMode, ModelConfig, QueueConfig};
use meetline_infra::{create_model_invoker, HttpClient, RabbitMqPublisher};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEXT: &str = "Maya volunteered to write unit tests by March 1st";

fn deterministic() -> ModelConfig {
    ModelConfig { mode: InvokerMode::Deterministic, ..ModelConfig::default() }
}

#[tokio::test]
async fn deterministic_mode_yields_one_decision_and_one_change() {
    let invoker = create_model_invoker(&deterministic()).expect("invoker");
    let service = ExtractionService::new(invoker);

    let events = service.extract_insights(TEXT).await;

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind, EventKind::Decision);
    assert!(events[0].message.starts_with("Decision 1:"));
    assert_eq!(events[1].kind, EventKind::Change);
    assert!(events[1].message.starts_with("Change 1:"));
}

#[tokio::test]
async fn deterministic_events_are_published_to_the_exchange() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/exchanges/%2F/notification"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/exchanges/%2F/notification/publish"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"routed": true})))
        .expect(2)
        .mount(&server)
        .await;

    let queue = QueueConfig { management_url: Some(server.uri()), ..QueueConfig::default() };
    let publisher = RabbitMqPublisher::from_config(HttpClient::new().expect("http"), &queue)
        .expect("publisher");
    let service = ExtractionService::new(create_model_invoker(&deterministic()).expect("invoker"))
        .with_publisher(Arc::new(publisher));

    let processed = service.process_document(TEXT, true).await.expect("processed");

    let report = processed.publish.expect("publish report");
    assert_eq!(report.published, 2);
    assert_eq!(report.failed, 0);
}

#[tokio::test]
async fn unreachable_queue_does_not_fail_the_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let queue = QueueConfig { management_url: Some(server.uri()), ..QueueConfig::default() };
    let publisher = RabbitMqPublisher::from_config(HttpClient::new().expect("http"), &queue)
        .expect("publisher");
    let service = ExtractionService::new(create_model_invoker(&deterministic()).expect("invoker"))
        .with_publisher(Arc::new(publisher));

    let processed = service.process_document(TEXT, true).await.expect("processed");

    assert_eq!(processed.events.len(), 2);
    assert_eq!(processed.publish.expect("publish report").failed, 2);
}

#[tokio::test]
async fn live_mode_against_stubbed_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "```json\n{\"action_items\": [{\"description\": \"Write unit tests\", \"assignee\": \"Maya\", \"deadline\": \"01.03.2026\"}]}\n```"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = ModelConfig {
        api_key: Some("sk-or-test".into()),
        api_url: format!("{}/api/v1/chat/completions", server.uri()),
        ..ModelConfig::default()
    };
    let service = ExtractionService::new(create_model_invoker(&config).expect("invoker"));

    let events = service
        .extract_insights("Maya Schmidt maya@x.com\nMaya volunteered to write unit tests by March 1st")
        .await;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].assignee_email.as_deref(), Some("maya@x.com"));
    assert_eq!(
        events[0].message,
        "Action Item 1: Write unit tests (Assigned to: Maya) – Deadline: 01.03.2026"
    );
}
