//! Shared HTTP plumbing for the outbound adapters

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
