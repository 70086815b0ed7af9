//! # Meetline Core
//!
//! Pure pipeline logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - The extraction pipeline (participants, prompt, normalizer, resolver,
//!   fan-out)
//! - Calendar planning and notification digest logic
//! - Port/adapter interfaces (traits)
//!
//! ## Architecture Principles
//! - Only depends on `meetline-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod calendar;
pub mod extraction;
pub mod notification;

// Re-export specific items to avoid ambiguity
pub use calendar::ports::CalendarGateway;
pub use calendar::{preview_invitations, CalendarService, PlanOptions};
pub use extraction::ports::{EventPublisher, ModelInvoker};
pub use extraction::{ExtractionService, ProcessedDocument, PublishReport};
pub use notification::ports::{Mailer, PendingTaskStore};
pub use notification::{AcceptedTask, DigestSettings, NotificationService, TaskResponseService};
