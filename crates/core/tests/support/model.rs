use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use meetline_core::{EventPublisher, ModelInvoker};
use meetline_domain::{Event, InvokerMode, MeetlineError, Result as DomainResult};

/// Invoker that answers every prompt with a fixed completion.
#[derive(Clone)]
pub struct StubInvoker {
    response: Option<String>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl StubInvoker {
    pub fn answering(response: impl Into<String>) -> Self {
        Self { response: Some(response.into()), prompts: Arc::default() }
    }

    /// Invoker whose model call "failed".
    pub fn silent() -> Self {
        Self { response: None, prompts: Arc::default() }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelInvoker for StubInvoker {
    async fn invoke(&self, prompt: &str) -> Option<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.response.clone()
    }

    fn mode(&self) -> InvokerMode {
        InvokerMode::Deterministic
    }
}

/// Publisher that records events and optionally fails on a given index.
#[derive(Clone, Default)]
pub struct RecordingPublisher {
    published: Arc<Mutex<Vec<Event>>>,
    fail_on: Option<usize>,
    unconfigured: bool,
}

impl RecordingPublisher {
    pub fn failing_on(index: usize) -> Self {
        Self { fail_on: Some(index), ..Self::default() }
    }

    pub fn unconfigured() -> Self {
        Self { unconfigured: true, ..Self::default() }
    }

    pub fn published(&self) -> Vec<Event> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, event: &Event) -> DomainResult<()> {
        let mut published = self.published.lock().unwrap();
        if self.fail_on == Some(published.len()) {
            published.push(event.clone());
            return Err(MeetlineError::Network("broker unavailable".into()));
        }
        published.push(event.clone());
        Ok(())
    }

    fn is_configured(&self) -> bool {
        !self.unconfigured
    }
}
