//! Google Calendar gateway
//!
//! Inserts planned entries through the Calendar v3 `events.insert` call using
//! the caller's OAuth access token.

use async_trait::async_trait;
use meetline_core::CalendarGateway;
use meetline_domain::{CalendarConfig, CalendarEntry, MeetlineError, Result};
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::InfraError;
use crate::http::HttpClient;

/// Google Calendar implementation of [`CalendarGateway`]
pub struct GoogleCalendarGateway {
    http_client: HttpClient,
    api_base: String,
    calendar_id: String,
}

#[derive(Debug, Deserialize)]
struct InsertedEvent {
    id: String,
}

impl GoogleCalendarGateway {
    pub fn new(http_client: HttpClient, config: &CalendarConfig) -> Self {
        Self {
            http_client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            calendar_id: config.calendar_id.clone(),
        }
    }

    fn events_url(&self) -> String {
        format!("{}/calendars/{}/events", self.api_base, urlencoding::encode(&self.calendar_id))
    }
}

#[async_trait]
impl CalendarGateway for GoogleCalendarGateway {
    async fn insert_event(&self, access_token: &str, entry: &CalendarEntry) -> Result<String> {
        let send_updates = entry.send_updates.to_string();
        let request = self
            .http_client
            .request(Method::POST, self.events_url())
            .bearer_auth(access_token)
            .query(&[("sendUpdates", send_updates.as_str())])
            .json(&entry.event);

        let response = self.http_client.send(request).await?;
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            warn!(%status, summary = %entry.event.summary, "Google Calendar rejected event");
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => MeetlineError::Auth(format!(
                    "Google Calendar access denied ({status}): {error_text}"
                )),
                _ => MeetlineError::Network(format!("Google API error ({status}): {error_text}")),
            });
        }

        let inserted: InsertedEvent =
            response.json().await.map_err(|e| MeetlineError::from(InfraError::from(e)))?;
        debug!(event_id = %inserted.id, send_updates = %send_updates, "Inserted calendar event");
        Ok(inserted.id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use meetline_domain::{
        Attendee, CalendarEvent, EntryKind, EventDate, ReminderMethod, ReminderOverride,
        Reminders, SendUpdates,
    };
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn gateway(server: &MockServer, calendar_id: &str) -> GoogleCalendarGateway {
        let config =
            CalendarConfig { api_base: server.uri(), calendar_id: calendar_id.to_string() };
        GoogleCalendarGateway::new(HttpClient::new().expect("http client"), &config)
    }

    fn invitation() -> CalendarEntry {
        let day = EventDate { date: NaiveDate::from_ymd_opt(2026, 6, 17).expect("date") };
        CalendarEntry {
            kind: EntryKind::Task,
            event: CalendarEvent {
                summary: "Prepare benchmarks".into(),
                description: "Task Assignment".into(),
                start: day,
                end: day,
                reminders: Reminders {
                    use_default: false,
                    overrides: vec![ReminderOverride::new(ReminderMethod::Email, 1440)],
                },
                color_id: "11".into(),
                attendees: vec![Attendee {
                    email: "thomas@corp.com".into(),
                    display_name: Some("Thomas".into()),
                    response_status: "needsAction".into(),
                    comment: Some("Task assigned with high priority".into()),
                }],
            },
            send_updates: SendUpdates::All,
            personal: false,
            invitee: Some("thomas@corp.com".into()),
        }
    }

    #[tokio::test]
    async fn inserts_event_with_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/calendars/primary/events"))
            .and(query_param("sendUpdates", "all"))
            .and(header("Authorization", "Bearer ya29.token"))
            .and(body_partial_json(json!({
                "summary": "Prepare benchmarks",
                "start": {"date": "2026-06-17"},
                "colorId": "11",
                "reminders": {"useDefault": false},
                "attendees": [{"email": "thomas@corp.com", "responseStatus": "needsAction"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "evt-42"})))
            .expect(1)
            .mount(&server)
            .await;

        let id = gateway(&server, "primary")
            .insert_event("ya29.token", &invitation())
            .await
            .expect("inserted");

        assert_eq!(id, "evt-42");
    }

    #[tokio::test]
    async fn calendar_id_is_url_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/calendars/team%40corp.com/events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "evt-1"})))
            .expect(1)
            .mount(&server)
            .await;

        let id = gateway(&server, "team@corp.com")
            .insert_event("token", &invitation())
            .await
            .expect("inserted");
        assert_eq!(id, "evt-1");
    }

    #[tokio::test]
    async fn expired_token_is_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid Credentials"))
            .mount(&server)
            .await;

        let err =
            gateway(&server, "primary").insert_event("stale", &invitation()).await.unwrap_err();
        assert!(matches!(err, MeetlineError::Auth(ref m) if m.contains("Invalid Credentials")));
    }

    #[tokio::test]
    async fn server_error_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err =
            gateway(&server, "primary").insert_event("token", &invitation()).await.unwrap_err();
        assert!(matches!(err, MeetlineError::Network(_)));
    }
}
