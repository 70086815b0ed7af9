//! # Meetline App
//!
//! Application layer - the `meetline` command line tool.
//!
//! This crate contains:
//! - Commands (document parsing, calendar, digests, task responses, health)
//! - Application context (dependency injection)
//! - Logging setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires the ports in `core` to the adapters in `infra`

pub mod commands;
pub mod context;
pub mod utils;

pub use commands::{run, Cli, Command};
pub use context::*;
