//! Domain types and models

pub mod calendar;
pub mod event;
pub mod extraction;
pub mod notification;
pub mod participant;

pub use calendar::{
    Attendee, CalendarEntry, CalendarEvent, CalendarSummary, EntryKind, EventDate,
    InvitationPreview, PreviewDetails, PreviewTask, ReminderMethod, ReminderOverride, Reminders,
    SendUpdates,
};
pub use event::{Event, EventKind, Priority};
pub use extraction::{
    ActionItem, CategoryItem, ComplianceItem, DelayItem, ExtractionResult, MilestoneItem,
    QuestionItem, ReminderItem, RiskItem,
};
pub use notification::{DispatchReport, NewPendingTask, OutgoingMail, PendingTask, TaskStatus};
pub use participant::{NameLookup, Participant};
