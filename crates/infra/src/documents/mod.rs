//! Document text input

pub mod loader;

pub use loader::{DocumentLoader, DocumentSource};
