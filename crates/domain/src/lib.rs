//! # Meetline Domain
//!
//! Business domain types and models for Meetline.
//!
//! This crate contains:
//! - Extraction result and normalized event types
//! - Calendar entry and notification types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants and date utilities
//!
//! ## Architecture
//! - No dependencies on other Meetline crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
