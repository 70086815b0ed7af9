//! Calendar integrations

pub mod google;

pub use google::GoogleCalendarGateway;
