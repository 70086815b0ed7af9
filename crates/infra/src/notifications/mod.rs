//! Outgoing mail delivery

pub mod spool;

pub use spool::SpoolMailer;
