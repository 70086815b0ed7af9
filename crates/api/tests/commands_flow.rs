//! End-to-end command flows on a fully wired `AppContext` in deterministic
//! mode, with storage and the mail spool in a temporary directory.

use chrono::Utc;
use meetline_app::commands::{
    accept_task, add_to_calendar, decline_task, health, notify, parse_document, preview,
};
use meetline_app::AppContext;
use meetline_domain::{
    Config, Event, EventKind, InvokerMode, MeetlineError, Priority, TaskStatus,
};
use meetline_infra::DocumentSource;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.model.mode = InvokerMode::Deterministic;
    config.storage.pending_tasks_path = dir.path().join("meetline.db");
    config.storage.pool_size = 2;
    config.notifications.spool_dir = dir.path().join("outbox");
    config.notifications.public_base_url = "https://meetline.example".into();
    config
}

async fn context(dir: &TempDir) -> AppContext {
    AppContext::new(test_config(dir)).await.expect("context should build")
}

fn action(description: &str, assignee: &str, email: Option<&str>, deadline: &str) -> Event {
    let mut event = Event::new(
        EventKind::ActionItem,
        format!("Action Item 1: {description} (Assigned to: {assignee})"),
        Utc::now(),
        Priority::Medium,
    );
    event.description = Some(description.into());
    event.assignee = Some(assignee.into());
    event.assignee_email = email.map(Into::into);
    event.deadline = Some(deadline.into());
    event
}

fn spooled_tokens(dir: &TempDir) -> Vec<String> {
    let mut tokens = Vec::new();
    for entry in std::fs::read_dir(dir.path().join("outbox")).expect("spool dir") {
        let mail = std::fs::read_to_string(entry.expect("entry").path()).expect("mail");
        for part in mail.split("/tasks/accept/").skip(1) {
            tokens.push(
                part.chars().take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_')).collect(),
            );
        }
    }
    tokens
}

#[tokio::test]
async fn parse_text_in_deterministic_mode() {
    let dir = TempDir::new().expect("temp dir");
    let ctx = context(&dir).await;

    let document = parse_document(
        &ctx,
        &DocumentSource::Text("Sprint review: Maya writes unit tests by Friday".into()),
        true,
    )
    .await
    .expect("parsed");

    let messages: Vec<&str> = document.events.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Decision 1: Die Beta-Veröffentlichung wird auf den 5. August verschoben",
            "Change 1: Ersetze den Message Broker durch NATS (abhängig vom Benchmark)",
        ]
    );

    let report = document.publish.expect("publish requested");
    assert!(report.skipped);
    assert_eq!(report.published, 0);
}

#[tokio::test]
async fn parse_rejects_blank_and_unsupported_documents() {
    let dir = TempDir::new().expect("temp dir");
    let ctx = context(&dir).await;

    let blank = parse_document(&ctx, &DocumentSource::Text("   ".into()), false).await;
    assert!(matches!(blank, Err(MeetlineError::InvalidInput(_))));

    let pdf = dir.path().join("minutes.pdf");
    std::fs::write(&pdf, b"%PDF-1.4").expect("write");
    let unsupported = parse_document(&ctx, &DocumentSource::File(pdf), false).await;
    assert!(matches!(unsupported, Err(MeetlineError::InvalidInput(_))));
}

#[tokio::test]
async fn live_mode_without_key_fails_startup_but_reports_health() {
    let dir = TempDir::new().expect("temp dir");
    let mut config = test_config(&dir);
    config.model.mode = InvokerMode::Live;
    config.model.api_key = None;

    assert!(matches!(AppContext::new(config.clone()).await, Err(MeetlineError::Config(_))));

    let report = health(&config).await;
    assert_eq!(report.mode, InvokerMode::Live);
    assert!(!report.api_key_configured);
    assert!(!report.queue_configured);
    let model = report.status.components.iter().find(|c| c.name == "model").expect("model");
    assert!(!model.is_healthy);
}

#[tokio::test]
async fn deterministic_health_is_green() {
    let dir = TempDir::new().expect("temp dir");
    let report = health(&test_config(&dir)).await;

    assert!(report.status.is_healthy);
    assert_eq!(report.status.score, 1.0);
    assert_eq!(report.status.components.len(), 3);

    let json = serde_json::to_value(&report).expect("serialize");
    assert_eq!(json["mode"], "deterministic");
}

#[tokio::test]
async fn preview_buckets_action_items() {
    let events = vec![
        action("Draft agenda", "Anna", Some("anna@corp.com"), "01.07.2026"),
        action("Prepare benchmarks", "Thomas", Some("thomas@corp.com"), "17.06.2026"),
        action("Book room", "Lena", None, "02.07.2026"),
    ];

    let result = preview(&events, "Anna@Corp.com");

    assert_eq!(result.total_events, 3);
    assert_eq!(result.tasks_for_self, 1);
    assert_eq!(result.tasks_for_others, 1);
    assert_eq!(result.tasks_without_email, 1);
}

#[tokio::test]
async fn calendar_command_counts_personal_and_invited_entries() {
    let dir = TempDir::new().expect("temp dir");
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/calendars/primary/events"))
        .and(header("Authorization", "Bearer anna-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "evt-1"})))
        .expect(2)
        .mount(&server)
        .await;

    let mut config = test_config(&dir);
    config.calendar.api_base = server.uri();
    let ctx = AppContext::new(config).await.expect("context");

    let events = vec![
        action("Draft agenda", "Anna", Some("anna@corp.com"), "01.07.2026"),
        action("Prepare benchmarks", "Thomas", Some("thomas@corp.com"), "17.06.2026"),
    ];
    let summary = add_to_calendar(&ctx, &events, "anna@corp.com", "anna-token", true)
        .await
        .expect("summary");

    assert_eq!(summary.created, 2);
    assert_eq!(summary.personal_tasks, 1);
    assert_eq!(summary.invitations_sent, 1);
    assert_eq!(summary.failed, 0);
}

#[tokio::test]
async fn notify_then_accept_and_decline() {
    let dir = TempDir::new().expect("temp dir");
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/calendars/primary/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "evt-42"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = test_config(&dir);
    config.calendar.api_base = server.uri();
    let ctx = AppContext::new(config).await.expect("context");

    let events = vec![
        action("Prepare benchmarks", "Thomas", Some("thomas@corp.com"), "17.06.2026"),
        action("Update wiki", "Thomas", Some("thomas@corp.com"), "18.06.2026"),
    ];
    let report = notify(&ctx, &events).await.expect("dispatch");
    assert_eq!(report.sent_to, 1);
    assert_eq!(report.total_emails, 1);

    let tokens = spooled_tokens(&dir);
    assert_eq!(tokens.len(), 2);

    let accepted = accept_task(&ctx, &tokens[0], Some("thomas-token")).await.expect("accepted");
    assert_eq!(accepted.task.status, TaskStatus::Accepted);
    assert_eq!(accepted.calendar_event_id.as_deref(), Some("evt-42"));

    let declined = decline_task(&ctx, &tokens[1]).await.expect("declined");
    assert_eq!(declined.status, TaskStatus::Declined);

    assert!(matches!(decline_task(&ctx, &tokens[0]).await, Err(MeetlineError::NotFound(_))));
    assert!(matches!(
        accept_task(&ctx, &tokens[1], Some("thomas-token")).await,
        Err(MeetlineError::NotFound(_))
    ));
}

#[tokio::test]
async fn notify_without_emails_is_invalid_input() {
    let dir = TempDir::new().expect("temp dir");
    let ctx = context(&dir).await;

    let events = vec![action("Book room", "Lena", None, "02.07.2026")];
    assert!(matches!(notify(&ctx, &events).await, Err(MeetlineError::InvalidInput(_))));
    assert!(matches!(notify(&ctx, &[]).await, Err(MeetlineError::InvalidInput(_))));
}
