//! Category-to-event fan-out
//!
//! Converts an [`ExtractionResult`] into a flat event sequence. Categories
//! are emitted in a fixed order (action items, decisions, changes, risks,
//! questions, agreements, delays, milestones, reminders, compliance) and each
//! element, freeform or structured, produces exactly one event numbered from
//! 1 within its category.

use chrono::{DateTime, SubsecRound, Utc};
use meetline_domain::constants::{
    DEFAULT_COMPLIANCE_TYPE, DEFAULT_SEVERITY, FALLBACK_DESCRIPTION, FALLBACK_EVENT,
    FALLBACK_ITEM, FALLBACK_QUESTION, FALLBACK_REASON, FALLBACK_REMINDER, QUESTION_STATUS_OPEN,
};
use meetline_domain::{
    ActionItem, CategoryItem, ComplianceItem, DelayItem, Event, EventKind, ExtractionResult,
    MilestoneItem, Priority, QuestionItem, ReminderItem, RiskItem,
};

/// Build the event sequence for `result`, stamping every event with `at`
/// truncated to whole seconds.
pub fn fan_out(result: &ExtractionResult, at: DateTime<Utc>) -> Vec<Event> {
    let mut builder = FanOut { at: at.trunc_subsecs(0), events: Vec::with_capacity(result.item_count()) };

    builder.structured(EventKind::ActionItem, &result.action_items, action_item_event);
    builder.texts(EventKind::Decision, &result.decisions);
    builder.texts(EventKind::Change, &result.changes);
    builder.structured(EventKind::Risk, &result.risks, risk_event);
    builder.structured(EventKind::Question, &result.questions, question_event);
    builder.texts(EventKind::Agreement, &result.agreements);
    builder.structured(EventKind::Delay, &result.delays, delay_event);
    builder.structured(EventKind::Milestone, &result.milestones, milestone_event);
    builder.structured(EventKind::Reminder, &result.reminders, reminder_event);
    builder.structured(EventKind::Compliance, &result.compliance, compliance_event);

    builder.events
}

struct FanOut {
    at: DateTime<Utc>,
    events: Vec<Event>,
}

impl FanOut {
    fn texts(&mut self, kind: EventKind, items: &[String]) {
        for (index, text) in items.iter().enumerate() {
            self.events.push(freeform_event(kind, index + 1, text, self.at));
        }
    }

    fn structured<T>(
        &mut self,
        kind: EventKind,
        items: &[CategoryItem<T>],
        build: fn(usize, &T, DateTime<Utc>) -> Event,
    ) {
        for (index, item) in items.iter().enumerate() {
            let number = index + 1;
            let event = match item {
                CategoryItem::Structured(fields) => build(number, fields, self.at),
                CategoryItem::Freeform(text) => freeform_event(kind, number, text, self.at),
            };
            self.events.push(event);
        }
    }
}

/// Non-blank value of an optional model field.
fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|text| !text.trim().is_empty())
}

fn prefix(kind: EventKind, number: usize, text: &str) -> String {
    format!("{} {number}: {text}", kind.label())
}

fn freeform_event(kind: EventKind, number: usize, text: &str, at: DateTime<Utc>) -> Event {
    let mut event = Event::new(kind, prefix(kind, number, text), at, kind.default_priority());
    if kind == EventKind::Question {
        event.status = Some(QUESTION_STATUS_OPEN.to_string());
    }
    event
}

fn action_item_event(number: usize, item: &ActionItem, at: DateTime<Utc>) -> Event {
    let description = present(item.description.as_ref()).unwrap_or(FALLBACK_DESCRIPTION);
    let assignee = present(item.assignee.as_ref());
    let assignee_email = present(item.assignee_email.as_ref());
    let deadline = present(item.deadline.as_ref());

    let mut message = prefix(EventKind::ActionItem, number, description);
    if let Some(assignee) = assignee {
        message.push_str(&format!(" (Assigned to: {assignee})"));
    }
    if let Some(deadline) = deadline {
        message.push_str(&format!(" – Deadline: {deadline}"));
    }

    let priority = Priority::from_model(item.priority.as_deref());
    let mut event = Event::new(EventKind::ActionItem, message, at, priority);
    event.description = Some(description.to_string());
    event.assignee = assignee.map(str::to_string);
    event.assignee_email = assignee_email.map(str::to_string);
    event.deadline = deadline.map(str::to_string);
    event
}

fn risk_event(number: usize, item: &RiskItem, at: DateTime<Utc>) -> Event {
    let description = present(item.description.as_ref()).unwrap_or(FALLBACK_DESCRIPTION);
    let severity = present(item.severity.as_ref()).unwrap_or(DEFAULT_SEVERITY);
    let raised_by = present(item.raised_by.as_ref());

    let mut message = prefix(EventKind::Risk, number, description);
    if let Some(raised_by) = raised_by {
        message.push_str(&format!(" (Raised by: {raised_by})"));
    }

    let priority =
        if severity.trim().eq_ignore_ascii_case("high") { Priority::High } else { Priority::Medium };
    let mut event = Event::new(EventKind::Risk, message, at, priority);
    event.description = Some(description.to_string());
    event.severity = Some(severity.to_string());
    event.raised_by = Some(raised_by.map(str::to_string));
    event
}

fn question_event(number: usize, item: &QuestionItem, at: DateTime<Utc>) -> Event {
    let question = present(item.question.as_ref()).unwrap_or(FALLBACK_QUESTION);
    let asked_by = present(item.asked_by.as_ref());

    let mut message = prefix(EventKind::Question, number, question);
    if let Some(asked_by) = asked_by {
        message.push_str(&format!(" (Asked by: {asked_by})"));
    }

    let mut event = Event::new(EventKind::Question, message, at, Priority::Medium);
    event.question = Some(question.to_string());
    event.asked_by = Some(asked_by.map(str::to_string));
    event.status = Some(QUESTION_STATUS_OPEN.to_string());
    event
}

fn delay_event(number: usize, item: &DelayItem, at: DateTime<Utc>) -> Event {
    let subject = present(item.item.as_ref()).unwrap_or(FALLBACK_ITEM);
    let original_date = present(item.original_date.as_ref());
    let new_date = present(item.new_date.as_ref());
    let reason = present(item.reason.as_ref()).unwrap_or(FALLBACK_REASON);

    let mut message = prefix(EventKind::Delay, number, subject);
    if let (Some(from), Some(to)) = (original_date, new_date) {
        message.push_str(&format!(" (from {from} to {to})"));
    }
    message.push_str(&format!(" – Reason: {reason}"));

    let mut event = Event::new(EventKind::Delay, message, at, Priority::High);
    event.item = Some(subject.to_string());
    event.original_date = Some(original_date.map(str::to_string));
    event.new_date = Some(new_date.map(str::to_string));
    event.reason = Some(reason.to_string());
    event
}

fn milestone_event(number: usize, item: &MilestoneItem, at: DateTime<Utc>) -> Event {
    let name = present(item.event.as_ref()).unwrap_or(FALLBACK_EVENT);
    let date = present(item.date.as_ref());
    let owner = present(item.owner.as_ref());

    let mut message = prefix(EventKind::Milestone, number, name);
    if let Some(date) = date {
        message.push_str(&format!(" – Date: {date}"));
    }
    if let Some(owner) = owner {
        message.push_str(&format!(" (Owner: {owner})"));
    }

    let mut event = Event::new(EventKind::Milestone, message, at, Priority::High);
    event.event = Some(name.to_string());
    event.date = date.map(str::to_string);
    event.owner = owner.map(str::to_string);
    event
}

fn reminder_event(number: usize, item: &ReminderItem, at: DateTime<Utc>) -> Event {
    let reminder = present(item.reminder.as_ref()).unwrap_or(FALLBACK_REMINDER);
    let deadline = present(item.deadline.as_ref());

    let mut message = prefix(EventKind::Reminder, number, reminder);
    if let Some(deadline) = deadline {
        message.push_str(&format!(" – Deadline: {deadline}"));
    }

    let mut event = Event::new(EventKind::Reminder, message, at, Priority::Medium);
    event.reminder = Some(reminder.to_string());
    event.deadline = deadline.map(str::to_string);
    event
}

fn compliance_event(number: usize, item: &ComplianceItem, at: DateTime<Utc>) -> Event {
    let subject = present(item.item.as_ref()).unwrap_or(FALLBACK_ITEM);
    let kind = present(item.kind.as_ref()).unwrap_or(DEFAULT_COMPLIANCE_TYPE);
    let deadline = present(item.deadline.as_ref());
    let owner = present(item.owner.as_ref());

    let mut message = prefix(EventKind::Compliance, number, subject);
    if let Some(deadline) = deadline {
        message.push_str(&format!(" – Deadline: {deadline}"));
    }
    if let Some(owner) = owner {
        message.push_str(&format!(" (Owner: {owner})"));
    }

    let mut event = Event::new(EventKind::Compliance, message, at, Priority::High);
    event.item = Some(subject.to_string());
    event.compliance_type = Some(kind.to_string());
    event.deadline = deadline.map(str::to_string);
    event.owner = owner.map(str::to_string);
    event
}
