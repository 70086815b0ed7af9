//! OpenRouter API client

use std::time::Duration;

use async_trait::async_trait;
use meetline_core::ModelInvoker;
use meetline_domain::constants::RESPONSE_EXCERPT_CHARS;
use meetline_domain::{InvokerMode, MeetlineError, ModelConfig, Result};
use reqwest::Method;
use tracing::{debug, info, warn};

use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ModelApiError};
use crate::http::HttpClient;

/// Chat-completion client for the extraction model
pub struct OpenRouterClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
    referer: String,
    title: String,
}

impl OpenRouterClient {
    /// Build a client from model configuration.
    ///
    /// The HTTP client carries the configured deadline and attempt count.
    ///
    /// # Errors
    /// Returns `MeetlineError::Config` when no API key is configured.
    pub fn from_config(config: &ModelConfig) -> Result<Self> {
        let api_key = config.api_key().ok_or_else(|| {
            MeetlineError::Config("OPENROUTER_API_KEY is required for live mode".to_string())
        })?;

        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.max(1)))
            .max_attempts(config.max_attempts.max(1) as usize)
            .build()?;

        Ok(Self {
            http_client,
            api_key: api_key.to_string(),
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            referer: config.referer.clone(),
            title: config.title.clone(),
        })
    }

    /// Send `prompt` as the sole user message and return the completion text.
    ///
    /// # Errors
    /// Returns `ModelApiError` for transport failures, non-success statuses,
    /// unexpected bodies, and responses without a completion.
    pub async fn complete(&self, prompt: &str) -> std::result::Result<String, ModelApiError> {
        let payload = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage { role: "user", content: prompt }],
        };

        let request = self
            .http_client
            .request(Method::POST, &self.api_url)
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", &self.title)
            .json(&payload);

        let response = self
            .http_client
            .send(request)
            .await
            .map_err(|err| ModelApiError::Network(err.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), model = %self.model, "Received completion response");

        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(match status.as_u16() {
                401 | 403 => ModelApiError::Authentication(format!("Invalid API key ({status})")),
                code => ModelApiError::Api { status: code, message: excerpt(&message) },
            });
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ModelApiError::InvalidSchema(format!("Failed to parse response: {e}")))?;

        body.into_content().ok_or(ModelApiError::EmptyCompletion)
    }
}

#[async_trait]
impl ModelInvoker for OpenRouterClient {
    async fn invoke(&self, prompt: &str) -> Option<String> {
        info!(model = %self.model, prompt_chars = prompt.chars().count(), "Calling completion endpoint");

        match self.complete(prompt).await {
            Ok(content) => {
                debug!(content_chars = content.chars().count(), "Completion received");
                Some(content)
            }
            Err(err) => {
                warn!(error = %err, "Completion call failed; no insights extracted");
                None
            }
        }
    }

    fn mode(&self) -> InvokerMode {
        InvokerMode::Live
    }
}

fn excerpt(text: &str) -> String {
    text.chars().take(RESPONSE_EXCERPT_CHARS).collect()
}
