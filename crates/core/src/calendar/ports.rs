//! Calendar integration port interfaces

use async_trait::async_trait;
use meetline_domain::{CalendarEntry, Result};

/// Trait for inserting planned entries into a user's calendar
#[async_trait]
pub trait CalendarGateway: Send + Sync {
    /// Insert one entry on behalf of the holder of `access_token`.
    ///
    /// Returns the identifier the calendar assigned to the new event.
    async fn insert_event(&self, access_token: &str, entry: &CalendarEntry) -> Result<String>;
}
