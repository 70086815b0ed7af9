//! Pending tasks and outgoing notification mail

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::event::Priority;
use crate::impl_domain_status_conversions;

/// Lifecycle of a task offered to an assignee by email
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
}

impl_domain_status_conversions!(TaskStatus {
    Pending => "pending",
    Accepted => "accepted",
    Declined => "declined",
});

/// Task awaiting an accept/decline response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTask {
    pub id: i64,
    pub description: String,
    pub assignee_email: String,
    /// Assignee display name, when the event carried one
    pub assignee: Option<String>,
    /// `DD.MM.YYYY` or the "No deadline" label
    pub deadline: String,
    pub priority: Priority,
    pub token: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

impl PendingTask {
    pub fn is_pending(&self) -> bool {
        self.status == TaskStatus::Pending
    }
}

/// Insert payload for a pending task; the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPendingTask {
    pub description: String,
    pub assignee_email: String,
    pub assignee: Option<String>,
    pub deadline: String,
    pub priority: Priority,
    pub token: String,
}

/// A rendered HTML mail ready for delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Result of a digest dispatch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchReport {
    /// Digests handed to the mailer successfully
    pub sent_to: usize,
    /// Distinct assignee addresses found
    pub total_emails: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_text() {
        assert_eq!(TaskStatus::Accepted.to_string(), "accepted");
        assert_eq!("DECLINED".parse::<TaskStatus>(), Ok(TaskStatus::Declined));
        assert!("done".parse::<TaskStatus>().is_err());
    }
}
