//! Application constants
//!
//! Centralized location for the fixed values of the extraction contract and
//! its downstream consumers.

// Prompt construction
pub const MAX_PROMPT_DOCUMENT_CHARS: usize = 4500;
pub const DEFAULT_REFERENCE_YEAR: i32 = 2026;

// Response diagnostics
pub const RESPONSE_EXCERPT_CHARS: usize = 500;

// Model endpoint defaults
pub const DEFAULT_MODEL_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL_NAME: &str = "mistralai/mistral-7b-instruct";
pub const DEFAULT_MODEL_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_HTTP_REFERER: &str = "http://localhost";
pub const DEFAULT_CLIENT_TITLE: &str = "meeting-parser";

// Fan-out fallback strings
pub const FALLBACK_DESCRIPTION: &str = "No description";
pub const FALLBACK_QUESTION: &str = "No question";
pub const FALLBACK_ITEM: &str = "Unknown item";
pub const FALLBACK_REASON: &str = "No reason provided";
pub const FALLBACK_EVENT: &str = "Unknown event";
pub const FALLBACK_REMINDER: &str = "No reminder";
pub const DEFAULT_SEVERITY: &str = "medium";
pub const DEFAULT_COMPLIANCE_TYPE: &str = "compliance";
pub const QUESTION_STATUS_OPEN: &str = "open";

// Calendar
pub const DEFAULT_CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";
pub const DEFAULT_CALENDAR_ID: &str = "primary";
pub const TASK_REMINDER_MINUTES: u32 = 1440;
pub const MILESTONE_EMAIL_REMINDER_MINUTES: u32 = 2880;
pub const MILESTONE_POPUP_REMINDER_MINUTES: u32 = 1440;
pub const COLOR_HIGH_PRIORITY: &str = "11";
pub const COLOR_MEDIUM_PRIORITY: &str = "5";
pub const COLOR_LOW_PRIORITY: &str = "2";
pub const COLOR_MILESTONE: &str = "9";

// Queue
pub const DEFAULT_QUEUE_EXCHANGE: &str = "notification";
pub const DEFAULT_QUEUE_ROUTING_KEY: &str = "analysis.meeting-notes";
pub const DEFAULT_QUEUE_VHOST: &str = "/";
/// Management plugin port used for plain `amqp://` broker URLs
pub const DEFAULT_MANAGEMENT_PORT: u16 = 15672;

// Notifications
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_SPOOL_DIR: &str = "outbox";
pub const DEFAULT_SENDER: &str = "meetline@localhost";
pub const TASK_TOKEN_BYTES: usize = 32;
pub const NO_DEADLINE_LABEL: &str = "No deadline";

// Storage
pub const DEFAULT_PENDING_TASKS_PATH: &str = "meetline.db";

// Document input
pub const URL_FETCH_TIMEOUT_SECS: u64 = 10;
