//! Normalized meeting events
//!
//! Every extracted category element becomes one [`Event`] with the same
//! required fields (`type`, `message`, `timestamp`, `priority`) and the
//! category-specific optional fields layered on top. Fields that the
//! downstream consumers expect to be present-but-null (`raised_by`,
//! `asked_by`, `original_date`, `new_date`) use a double option so that
//! `Some(None)` serializes as `null` while `None` omits the key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

/// Category tag of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    ActionItem,
    Decision,
    Change,
    Risk,
    Question,
    Agreement,
    Delay,
    Milestone,
    Reminder,
    Compliance,
}

impl_domain_status_conversions!(EventKind {
    ActionItem => "action_item",
    Decision => "decision",
    Change => "change",
    Risk => "risk",
    Question => "question",
    Agreement => "agreement",
    Delay => "delay",
    Milestone => "milestone",
    Reminder => "reminder",
    Compliance => "compliance",
});

impl EventKind {
    /// Human label used as the message prefix.
    pub const fn label(self) -> &'static str {
        match self {
            Self::ActionItem => "Action Item",
            Self::Decision => "Decision",
            Self::Change => "Change",
            Self::Risk => "Risk",
            Self::Question => "Question",
            Self::Agreement => "Agreement",
            Self::Delay => "Delay",
            Self::Milestone => "Milestone",
            Self::Reminder => "Reminder",
            Self::Compliance => "Compliance",
        }
    }

    /// Priority assigned when the element does not carry one.
    pub const fn default_priority(self) -> Priority {
        match self {
            Self::Delay | Self::Milestone | Self::Compliance => Priority::High,
            _ => Priority::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl_domain_status_conversions!(Priority {
    High => "high",
    Medium => "medium",
    Low => "low",
});

impl Priority {
    /// Parse a model-provided priority; anything unrecognised is `medium`.
    pub fn from_model(value: Option<&str>) -> Self {
        value.and_then(|raw| raw.trim().parse().ok()).unwrap_or_default()
    }
}

/// A single normalized meeting event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub message: String,
    #[serde(with = "timestamp_format")]
    pub timestamp: DateTime<Utc>,
    pub priority: Priority,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(
        default,
        with = "::serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub raised_by: Option<Option<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(
        default,
        with = "::serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub asked_by: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(
        default,
        with = "::serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_date: Option<Option<String>>,
    #[serde(
        default,
        with = "::serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub new_date: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Filled by callers that know the milestone owner's address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_type: Option<String>,
}

impl Event {
    /// Event with the required fields set and every optional field absent.
    pub fn new(
        kind: EventKind,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
        priority: Priority,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            timestamp,
            priority,
            description: None,
            assignee: None,
            assignee_email: None,
            deadline: None,
            severity: None,
            raised_by: None,
            question: None,
            asked_by: None,
            status: None,
            item: None,
            original_date: None,
            new_date: None,
            reason: None,
            event: None,
            date: None,
            owner: None,
            owner_email: None,
            reminder: None,
            compliance_type: None,
        }
    }

    pub fn is_action_item(&self) -> bool {
        self.kind == EventKind::ActionItem
    }

    /// Assignee email with surrounding whitespace removed; empty counts as absent.
    pub fn contact_email(&self) -> Option<&str> {
        self.assignee_email.as_deref().map(str::trim).filter(|email| !email.is_empty())
    }
}

/// `YYYY-MM-DDTHH:MM:SSZ` on output; any RFC 3339 timestamp on input.
pub mod timestamp_format {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
