//! Calendar planning and insertion

pub mod planner;
pub mod ports;
pub mod preview;
pub mod service;

pub use planner::{milestone_entry, plan_entries, task_entry, PlanOptions};
pub use preview::preview_invitations;
pub use service::CalendarService;
