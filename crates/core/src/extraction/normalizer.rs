//! Model response normalization
//!
//! Models often wrap their JSON in a markdown fence (```` ```json ... ``` ````)
//! despite being told not to. The fence is stripped before parsing. Any
//! failure is logged with an excerpt of the offending text and reported as
//! "no data"; nothing here returns an error.

use meetline_domain::constants::RESPONSE_EXCERPT_CHARS;
use meetline_domain::ExtractionResult;
use serde_json::Value;
use tracing::warn;

const FENCE: &str = "```";

/// Parse a raw completion into a JSON value.
///
/// Returns `None` when the text (or the fenced block inside it) is not valid
/// JSON.
pub fn clean_json_response(raw: &str) -> Option<Value> {
    let text = raw.trim();

    let candidate = fenced_body(text).unwrap_or(text);
    match serde_json::from_str::<Value>(candidate) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(
                error = %err,
                excerpt = %excerpt(text),
                "Model response is not valid JSON"
            );
            None
        }
    }
}

/// Parse a raw completion into an extraction result.
///
/// A JSON value that is not an object counts as no data.
pub fn normalize_response(raw: &str) -> Option<ExtractionResult> {
    let value = clean_json_response(raw)?;
    let result = ExtractionResult::from_value(value);
    if result.is_none() {
        warn!(excerpt = %excerpt(raw.trim()), "Model response is not a JSON object");
    }
    result
}

/// Body of a leading code fence, without its language tag.
///
/// Requires an opening and a closing fence; a lone opening fence is not a
/// fenced block.
fn fenced_body(text: &str) -> Option<&str> {
    if !text.starts_with(FENCE) {
        return None;
    }
    let mut segments = text.split(FENCE);
    let _leading = segments.next()?;
    let body = segments.next()?;
    segments.next()?;

    let body = match body.split_once('\n') {
        Some((_language_tag, rest)) => rest,
        None => body,
    };
    Some(body.trim())
}

fn excerpt(text: &str) -> &str {
    match text.char_indices().nth(RESPONSE_EXCERPT_CHARS) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn strips_fence_with_language_tag() {
        assert_eq!(clean_json_response("```json\n{\"a\":1}\n```"), Some(json!({"a": 1})));
    }

    #[test]
    fn strips_fence_without_language_tag() {
        assert_eq!(clean_json_response("```\n{\"a\":1}\n```"), Some(json!({"a": 1})));
    }

    #[test]
    fn parses_bare_json() {
        assert_eq!(clean_json_response("  {\"a\":1}\n"), Some(json!({"a": 1})));
    }

    #[test]
    fn rejects_prose() {
        assert_eq!(clean_json_response("not json"), None);
    }

    #[test]
    fn unterminated_fence_falls_back_to_whole_text() {
        assert_eq!(clean_json_response("```json\n{\"a\":1}"), None);
    }

    #[test]
    fn fence_on_single_line_keeps_body() {
        // no newline inside the fence, so there is no language tag to drop
        assert_eq!(clean_json_response("```{\"a\":1}```"), Some(json!({"a": 1})));
    }

    #[test]
    fn non_object_json_is_no_data() {
        assert!(normalize_response("[1, 2, 3]").is_none());
        assert!(normalize_response("\"text\"").is_none());
    }

    #[test]
    fn object_json_becomes_extraction_result() {
        let result = normalize_response("```json\n{\"decisions\": [\"Ship on Friday\"]}\n```")
            .expect("object payload");
        assert_eq!(result.decisions, vec!["Ship on Friday".to_string()]);
    }

    #[test]
    fn excerpt_is_bounded() {
        let long = "x".repeat(RESPONSE_EXCERPT_CHARS * 2);
        assert_eq!(excerpt(&long).len(), RESPONSE_EXCERPT_CHARS);
    }
}
