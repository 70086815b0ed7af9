//! Extraction service - meeting text to normalized events

use std::sync::Arc;

use chrono::{DateTime, Utc};
use meetline_domain::{Event, MeetlineError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use super::fanout::fan_out;
use super::normalizer::normalize_response;
use super::participants::extract_participants;
use super::ports::{EventPublisher, ModelInvoker};
use super::prompt::build_prompt;
use super::resolver::resolve_assignees;

/// Outcome of publishing a batch of events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishReport {
    pub published: usize,
    pub failed: usize,
    /// No publisher or no destination configured
    pub skipped: bool,
}

/// Events extracted from one document plus the publication outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedDocument {
    pub events: Vec<Event>,
    pub publish: Option<PublishReport>,
}

/// Meeting insight extraction service
pub struct ExtractionService {
    invoker: Arc<dyn ModelInvoker>,
    publisher: Option<Arc<dyn EventPublisher>>,
}

impl ExtractionService {
    /// Create a new extraction service
    pub fn new(invoker: Arc<dyn ModelInvoker>) -> Self {
        Self { invoker, publisher: None }
    }

    /// Attach a publisher for [`ExtractionService::publish_events`]
    pub fn with_publisher(mut self, publisher: Arc<dyn EventPublisher>) -> Self {
        self.publisher = Some(publisher);
        self
    }

    /// Extract events from meeting text, stamped with the current time.
    ///
    /// Never fails; model or parse problems yield an empty list.
    pub async fn extract_insights(&self, text: &str) -> Vec<Event> {
        self.extract_insights_at(text, Utc::now()).await
    }

    /// Extract events from meeting text, stamped with `at`.
    pub async fn extract_insights_at(&self, text: &str, at: DateTime<Utc>) -> Vec<Event> {
        let scan = extract_participants(text);
        info!(
            participants = scan.participants.len(),
            mode = %self.invoker.mode(),
            "Extracting meeting insights"
        );

        let prompt = build_prompt(text);
        let Some(raw) = self.invoker.invoke(&prompt).await else {
            warn!("Model returned no content");
            return Vec::new();
        };

        let Some(mut result) = normalize_response(&raw) else {
            warn!("Model response could not be normalized");
            return Vec::new();
        };

        let resolved = resolve_assignees(&mut result, &scan.lookup);
        debug!(resolved, "Resolved assignee emails from participant list");

        let events = fan_out(&result, at);
        info!(events = events.len(), "Created events");
        events
    }

    /// Publish events through the configured publisher.
    ///
    /// Publication is non-critical: failures are logged and counted.
    pub async fn publish_events(&self, events: &[Event]) -> PublishReport {
        let Some(publisher) = self.publisher.as_ref().filter(|p| p.is_configured()) else {
            info!(events = events.len(), "No message queue configured, skipping publication");
            return PublishReport { skipped: true, ..PublishReport::default() };
        };

        let mut report = PublishReport::default();
        for event in events {
            match publisher.publish(event).await {
                Ok(()) => report.published += 1,
                Err(err) => {
                    error!(error = %err, kind = %event.kind, "Failed to publish event");
                    report.failed += 1;
                }
            }
        }
        info!(published = report.published, failed = report.failed, "Published events");
        report
    }

    /// Validate document text, extract events and optionally publish them.
    ///
    /// # Errors
    /// Returns `MeetlineError::InvalidInput` when the text is empty or
    /// whitespace only.
    pub async fn process_document(&self, text: &str, publish: bool) -> Result<ProcessedDocument> {
        if text.trim().is_empty() {
            return Err(MeetlineError::InvalidInput("No text could be extracted from the document".to_string()));
        }

        let events = self.extract_insights(text).await;
        if events.is_empty() {
            warn!("No insights extracted from document");
        }

        let publish = if publish { Some(self.publish_events(&events).await) } else { None };
        Ok(ProcessedDocument { events, publish })
    }
}
