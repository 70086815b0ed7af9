//! Port interfaces for the extraction pipeline
//!
//! These traits define the boundaries between the pipeline and the
//! infrastructure that talks to the model endpoint and the message queue.

use async_trait::async_trait;
use meetline_domain::{Event, InvokerMode, Result};

/// Sends a prompt to a language model and returns the raw completion text.
///
/// Implementations never fail: transport errors, non-success statuses and
/// malformed responses are logged and reported as `None`.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    /// Complete `prompt`; `None` means the model produced nothing usable.
    async fn invoke(&self, prompt: &str) -> Option<String>;

    /// Which mode this invoker runs in
    fn mode(&self) -> InvokerMode;
}

/// Publishes normalized events to downstream consumers
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish one event
    async fn publish(&self, event: &Event) -> Result<()>;

    /// Whether a destination is configured; unconfigured publishers skip work
    fn is_configured(&self) -> bool {
        true
    }
}
