//! Calendar entry drafts and planning summaries
//!
//! [`CalendarEvent`] mirrors the Google Calendar v3 event resource closely
//! enough to be posted as-is. [`CalendarEntry`] wraps it with the metadata the
//! planner decided on (who gets invited, whether updates are sent).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderMethod {
    Email,
    Popup,
}

impl_domain_status_conversions!(ReminderMethod {
    Email => "email",
    Popup => "popup",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderOverride {
    pub method: ReminderMethod,
    pub minutes: u32,
}

impl ReminderOverride {
    pub const fn new(method: ReminderMethod, minutes: u32) -> Self {
        Self { method, minutes }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminders {
    pub use_default: bool,
    pub overrides: Vec<ReminderOverride>,
}

/// All-day date boundary (`{"date": "YYYY-MM-DD"}`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDate {
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub response_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Event resource body sent to the calendar API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub summary: String,
    pub description: String,
    pub start: EventDate,
    pub end: EventDate,
    pub reminders: Reminders,
    pub color_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attendees: Vec<Attendee>,
}

/// `sendUpdates` query parameter of the insert call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SendUpdates {
    All,
    #[default]
    None,
}

impl_domain_status_conversions!(SendUpdates {
    All => "all",
    None => "none",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Task,
    Milestone,
}

/// A planned calendar insertion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub kind: EntryKind,
    pub event: CalendarEvent,
    pub send_updates: SendUpdates,
    /// Task assigned to the organizer themself
    pub personal: bool,
    /// Address an invitation goes to, when one is sent
    pub invitee: Option<String>,
}

/// Counters reported after inserting a batch of entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarSummary {
    pub created: usize,
    pub personal_tasks: usize,
    pub invitations_sent: usize,
    pub failed: usize,
}

/// An action item as listed in the invitation preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewTask {
    pub assignee: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewDetails {
    #[serde(rename = "self")]
    pub own: Vec<PreviewTask>,
    pub others: Vec<PreviewTask>,
    pub no_email: Vec<PreviewTask>,
}

/// What a calendar insertion would do, without calling the calendar API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvitationPreview {
    pub total_events: usize,
    pub tasks_for_self: usize,
    pub tasks_for_others: usize,
    pub tasks_without_email: usize,
    pub details: PreviewDetails,
    pub organizer: String,
}
