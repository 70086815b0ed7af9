//! Model invoker selection

use std::sync::Arc;

use meetline_core::ModelInvoker;
use meetline_domain::{InvokerMode, ModelConfig, Result};
use tracing::info;

use super::canned::CannedInvoker;
use super::openrouter::OpenRouterClient;

/// Build the invoker for the configured mode.
///
/// # Errors
/// Returns `MeetlineError::Config` when live mode has no API key.
pub fn create_model_invoker(config: &ModelConfig) -> Result<Arc<dyn ModelInvoker>> {
    info!(mode = %config.mode, model = %config.model, "Creating model invoker");
    match config.mode {
        InvokerMode::Deterministic => Ok(Arc::new(CannedInvoker)),
        InvokerMode::Live => Ok(Arc::new(OpenRouterClient::from_config(config)?)),
    }
}
