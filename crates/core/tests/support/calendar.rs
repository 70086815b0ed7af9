use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use meetline_core::CalendarGateway;
use meetline_domain::{CalendarEntry, MeetlineError, Result as DomainResult};

/// In-memory mock for `CalendarGateway`.
///
/// Records inserted entries; entries whose summary is listed in
/// `failing_summaries` are rejected.
#[derive(Default, Clone)]
pub struct MockCalendarGateway {
    inserted: Arc<Mutex<Vec<(String, CalendarEntry)>>>,
    failing_summaries: Vec<String>,
}

impl MockCalendarGateway {
    pub fn failing_on(summary: &str) -> Self {
        Self { failing_summaries: vec![summary.to_string()], ..Self::default() }
    }

    pub fn inserted(&self) -> Vec<(String, CalendarEntry)> {
        self.inserted.lock().unwrap().clone()
    }
}

#[async_trait]
impl CalendarGateway for MockCalendarGateway {
    async fn insert_event(&self, access_token: &str, entry: &CalendarEntry) -> DomainResult<String> {
        if self.failing_summaries.contains(&entry.event.summary) {
            return Err(MeetlineError::Network("calendar API returned 500".into()));
        }
        let mut inserted = self.inserted.lock().unwrap();
        inserted.push((access_token.to_string(), entry.clone()));
        Ok(format!("evt-{}", inserted.len()))
    }
}
