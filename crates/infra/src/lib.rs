//! # Meetline Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The retrying HTTP client shared by every outbound adapter
//! - Model invokers (OpenRouter chat completions, deterministic fixture)
//! - Google Calendar gateway and RabbitMQ management-API publisher
//! - Spool-directory mailer and SQLite pending task store
//! - Document loading and configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `meetline-core`
//! - Contains all "impure" code (network, filesystem, database)

pub mod config;
pub mod database;
pub mod documents;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod notifications;

pub use database::{DbManager, SqlitePendingTaskStore};
pub use documents::{DocumentLoader, DocumentSource};
pub use errors::InfraError;
pub use http::HttpClient;
pub use integrations::*;
pub use notifications::SpoolMailer;
