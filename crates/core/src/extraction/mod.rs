//! Meeting text to normalized events
//!
//! Pipeline: participant scan → prompt → model → normalizer → assignee
//! resolution → fan-out. Every step inside the model boundary fails soft.

pub mod fanout;
pub mod normalizer;
pub mod participants;
pub mod ports;
pub mod prompt;
pub mod resolver;
pub mod service;

pub use fanout::fan_out;
pub use normalizer::{clean_json_response, normalize_response};
pub use participants::{extract_participants, ParticipantScan};
pub use prompt::build_prompt;
pub use resolver::resolve_assignees;
pub use service::{ExtractionService, ProcessedDocument, PublishReport};
