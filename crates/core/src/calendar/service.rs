//! Calendar service - plans entries and inserts them through the gateway

use std::sync::Arc;

use meetline_domain::{CalendarEntry, CalendarSummary, Event, MeetlineError, Result};
use tracing::{error, info};

use super::planner::{plan_entries, PlanOptions};
use super::ports::CalendarGateway;

pub struct CalendarService {
    gateway: Arc<dyn CalendarGateway>,
}

impl CalendarService {
    pub fn new(gateway: Arc<dyn CalendarGateway>) -> Self {
        Self { gateway }
    }

    /// Plan and insert calendar entries for `events`.
    ///
    /// Individual insert failures are logged and counted in
    /// [`CalendarSummary::failed`]; they do not abort the batch.
    ///
    /// # Errors
    /// Returns `MeetlineError::InvalidInput` when `events` is empty and
    /// `MeetlineError::Auth` when no access token is given.
    pub async fn add_events(
        &self,
        access_token: &str,
        events: &[Event],
        options: PlanOptions<'_>,
    ) -> Result<CalendarSummary> {
        if events.is_empty() {
            return Err(MeetlineError::InvalidInput("No events provided".to_string()));
        }
        if access_token.trim().is_empty() {
            return Err(MeetlineError::Auth(
                "Calendar not connected: no access token available".to_string(),
            ));
        }

        info!(
            events = events.len(),
            organizer = options.organizer_email.unwrap_or("-"),
            send_invitations = options.send_invitations,
            "Adding events to calendar"
        );

        let mut summary = CalendarSummary::default();
        for entry in plan_entries(events, options) {
            match self.gateway.insert_event(access_token, &entry).await {
                Ok(id) => {
                    info!(event_id = %id, summary = %entry.event.summary, "Created calendar event");
                    summary.created += 1;
                    if entry.personal {
                        summary.personal_tasks += 1;
                    }
                    if entry.invitee.is_some() {
                        summary.invitations_sent += 1;
                    }
                }
                Err(err) => {
                    error!(error = %err, summary = %entry.event.summary, "Failed to create calendar event");
                    summary.failed += 1;
                }
            }
        }

        info!(
            created = summary.created,
            personal_tasks = summary.personal_tasks,
            invitations_sent = summary.invitations_sent,
            failed = summary.failed,
            "Calendar insertion finished"
        );
        Ok(summary)
    }

    /// Insert a single planned entry.
    ///
    /// # Errors
    /// Propagates the gateway error.
    pub async fn insert_entry(&self, access_token: &str, entry: &CalendarEntry) -> Result<String> {
        self.gateway.insert_event(access_token, entry).await
    }
}
