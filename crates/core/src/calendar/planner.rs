//! Calendar entry planning
//!
//! Turns action-item and milestone events into all-day calendar entries.
//! Action items need a deadline, milestones a date; both must contain a
//! `DD.MM.YYYY` value or the event is skipped.
//!
//! Attendee policy: an action item whose `assignee_email` matches the
//! organizer (case-insensitively) is a personal task and nobody is invited.
//! Any other address becomes an attendee and the insert sends updates.
//! With invitations disabled no attendees are added at all.

use meetline_domain::constants::{
    COLOR_HIGH_PRIORITY, COLOR_LOW_PRIORITY, COLOR_MEDIUM_PRIORITY, COLOR_MILESTONE,
    MILESTONE_EMAIL_REMINDER_MINUTES, MILESTONE_POPUP_REMINDER_MINUTES, TASK_REMINDER_MINUTES,
};
use meetline_domain::utils::dates::convert_date;
use meetline_domain::{
    Attendee, CalendarEntry, CalendarEvent, EntryKind, Event, EventDate, EventKind, Priority,
    ReminderMethod, ReminderOverride, Reminders, SendUpdates,
};
use tracing::{debug, warn};

const NEEDS_ACTION: &str = "needsAction";
const UNASSIGNED: &str = "Unassigned";
const DEFAULT_MILESTONE_NAME: &str = "Milestone";
const DEFAULT_MILESTONE_OWNER: &str = "Team";

/// Who is creating the entries and whether invitations go out
#[derive(Debug, Clone, Copy)]
pub struct PlanOptions<'a> {
    pub organizer_email: Option<&'a str>,
    pub send_invitations: bool,
}

impl<'a> PlanOptions<'a> {
    pub const fn new(organizer_email: Option<&'a str>, send_invitations: bool) -> Self {
        Self { organizer_email, send_invitations }
    }
}

/// Plan calendar entries for every eligible event, in input order.
pub fn plan_entries(events: &[Event], options: PlanOptions<'_>) -> Vec<CalendarEntry> {
    let entries: Vec<CalendarEntry> = events
        .iter()
        .filter_map(|event| match event.kind {
            EventKind::ActionItem => task_entry(event, options),
            EventKind::Milestone => milestone_entry(event, options),
            _ => None,
        })
        .collect();

    debug!(events = events.len(), entries = entries.len(), "Planned calendar entries");
    entries
}

fn same_address(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|text| !text.trim().is_empty())
}

const fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::High => COLOR_HIGH_PRIORITY,
        Priority::Medium => COLOR_MEDIUM_PRIORITY,
        Priority::Low => COLOR_LOW_PRIORITY,
    }
}

/// Entry for an action item with a convertible deadline.
pub fn task_entry(event: &Event, options: PlanOptions<'_>) -> Option<CalendarEntry> {
    let deadline = non_blank(event.deadline.as_ref())?;
    let Some(date) = convert_date(deadline) else {
        warn!(deadline, "Skipping task with invalid deadline");
        return None;
    };

    let description = non_blank(event.description.as_ref()).unwrap_or(&event.message);
    let assignee = non_blank(event.assignee.as_ref()).unwrap_or(UNASSIGNED);
    let priority = event.priority;

    let mut body = format!(
        "Task Assignment\n\nAssignee: {assignee}\nPriority: {}\nDeadline: {}\n\n\
         This task was extracted from a meeting protocol.",
        priority.to_string().to_uppercase(),
        date.format("%Y-%m-%d"),
    );

    let mut attendees = Vec::new();
    let mut personal = false;
    let mut invitee = None;

    if let (Some(email), true) = (event.contact_email(), options.send_invitations) {
        if options.organizer_email.is_some_and(|organizer| same_address(email, organizer)) {
            body.push_str("\n\n✓ Your personal task");
            personal = true;
        } else {
            body.push_str(&format!("\n\n✉️ Invitation sent to {assignee}"));
            attendees.push(Attendee {
                email: email.to_string(),
                display_name: Some(assignee.to_string()),
                response_status: NEEDS_ACTION.to_string(),
                comment: Some(format!("Task assigned with {priority} priority")),
            });
            invitee = Some(email.to_string());
        }
    }

    Some(CalendarEntry {
        kind: EntryKind::Task,
        event: CalendarEvent {
            summary: description.to_string(),
            description: body,
            start: EventDate { date },
            end: EventDate { date },
            reminders: Reminders {
                use_default: false,
                overrides: vec![
                    ReminderOverride::new(ReminderMethod::Email, TASK_REMINDER_MINUTES),
                    ReminderOverride::new(ReminderMethod::Popup, TASK_REMINDER_MINUTES),
                ],
            },
            color_id: priority_color(priority).to_string(),
            attendees,
        },
        send_updates: if invitee.is_some() { SendUpdates::All } else { SendUpdates::None },
        personal,
        invitee,
    })
}

/// Entry for a milestone with a convertible date.
pub fn milestone_entry(event: &Event, options: PlanOptions<'_>) -> Option<CalendarEntry> {
    let raw_date = non_blank(event.date.as_ref())?;
    let Some(date) = convert_date(raw_date) else {
        warn!(date = raw_date, "Skipping milestone with invalid date");
        return None;
    };

    let name = non_blank(event.event.as_ref()).unwrap_or(DEFAULT_MILESTONE_NAME);
    let owner = non_blank(event.owner.as_ref());

    let invitee = non_blank(event.owner_email.as_ref())
        .filter(|_| options.send_invitations)
        .filter(|email| {
            options.organizer_email.is_some_and(|organizer| !same_address(email, organizer))
        })
        .map(|email| email.trim().to_string());

    let attendees = invitee
        .iter()
        .map(|email| Attendee {
            email: email.clone(),
            display_name: owner.map(str::to_string),
            response_status: NEEDS_ACTION.to_string(),
            comment: None,
        })
        .collect();

    Some(CalendarEntry {
        kind: EntryKind::Milestone,
        event: CalendarEvent {
            summary: format!("📍 {name}"),
            description: format!(
                "Milestone event\n\nOwner: {}",
                owner.unwrap_or(DEFAULT_MILESTONE_OWNER)
            ),
            start: EventDate { date },
            end: EventDate { date },
            reminders: Reminders {
                use_default: false,
                overrides: vec![
                    ReminderOverride::new(ReminderMethod::Email, MILESTONE_EMAIL_REMINDER_MINUTES),
                    ReminderOverride::new(ReminderMethod::Popup, MILESTONE_POPUP_REMINDER_MINUTES),
                ],
            },
            color_id: COLOR_MILESTONE.to_string(),
            attendees,
        },
        send_updates: if invitee.is_some() { SendUpdates::All } else { SendUpdates::None },
        personal: false,
        invitee,
    })
}
