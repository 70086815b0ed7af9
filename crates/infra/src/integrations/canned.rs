//! Deterministic model invoker
//!
//! Answers every prompt with the same fixture and never touches the network.

use async_trait::async_trait;
use meetline_core::ModelInvoker;
use meetline_domain::InvokerMode;
use serde_json::json;
use tracing::info;

/// Invoker that always returns one decision and one change
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedInvoker;

impl CannedInvoker {
    /// The fixed completion text
    pub fn payload() -> String {
        json!({
            "decisions": ["Die Beta-Veröffentlichung wird auf den 5. August verschoben"],
            "changes": ["Ersetze den Message Broker durch NATS (abhängig vom Benchmark)"]
        })
        .to_string()
    }
}

#[async_trait]
impl ModelInvoker for CannedInvoker {
    async fn invoke(&self, _prompt: &str) -> Option<String> {
        info!("Deterministic mode active, completion endpoint not called");
        Some(Self::payload())
    }

    fn mode(&self) -> InvokerMode {
        InvokerMode::Deterministic
    }
}
