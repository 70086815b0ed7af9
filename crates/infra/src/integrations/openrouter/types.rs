//! Chat-completion wire types

use serde::{Deserialize, Serialize};

/// Failures talking to the completion endpoint
#[derive(Debug, thiserror::Error)]
pub enum ModelApiError {
    /// Connection failed, timed out, or the request could not be built
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Credential rejected
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Body did not have the chat-completion shape
    #[error("Invalid response schema: {0}")]
    InvalidSchema(String),

    /// `choices` was missing or empty, or the first choice had no content
    #[error("Response contained no completion")]
    EmptyCompletion,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: Message,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Message {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if any
    pub(crate) fn into_content(self) -> Option<String> {
        self.choices.into_iter().next().and_then(|choice| choice.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_has_single_user_message() {
        let request = ChatCompletionRequest {
            model: "mistralai/mistral-7b-instruct",
            messages: vec![ChatMessage { role: "user", content: "[INST] ... [/INST]" }],
        };

        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["model"], "mistralai/mistral-7b-instruct");
        assert_eq!(json["messages"].as_array().map(Vec::len), Some(1));
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn missing_choices_have_no_content() {
        let response: ChatCompletionResponse =
            serde_json::from_str(r#"{"id": "gen-1"}"#).expect("deserialize");
        assert!(response.into_content().is_none());

        let null_content: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": null}}]}"#)
                .expect("deserialize");
        assert!(null_content.into_content().is_none());
    }
}
