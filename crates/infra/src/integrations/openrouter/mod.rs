//! OpenRouter chat-completion integration
//!
//! Sends the extraction prompt as the single user message of a chat
//! completion and hands back `choices[0].message.content`.
//!
//! # Error Handling
//!
//! [`OpenRouterClient::complete`] reports failures as [`ModelApiError`].
//! The [`ModelInvoker`](meetline_core::ModelInvoker) implementation logs
//! them and answers `None`, so a failing endpoint yields zero insights
//! instead of an error.

pub mod client;
pub mod types;

pub use client::OpenRouterClient;
pub use types::ModelApiError;
