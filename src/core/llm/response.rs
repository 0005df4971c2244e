//! Chat-completion response parsing: reply text and token usage.

use serde_json::Value;

use super::ChatError;
use crate::core::normalize::Normalize;

/// Token usage reported by the API alongside a reply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

/// Parse token usage from a response's `usage` field.
pub(crate) fn parse_usage(response: &Value) -> Option<TokenUsage> {
    let usage = response.get("usage")?;
    Some(TokenUsage {
        prompt_tokens: usage.get("prompt_tokens").and_then(|v| v.as_u64()).unwrap_or(0),
        completion_tokens: usage
            .get("completion_tokens")
            .and_then(|v| v.as_u64())
            .unwrap_or(0),
        total_tokens: usage.get("total_tokens").and_then(|v| v.as_u64()).unwrap_or(0),
    })
}

/// Text of `choices[0].message.content`.
/// Content may be a plain string or an array of `{"type": "text", "text": ...}` chunks,
/// which are concatenated.
pub(crate) fn extract_reply(response: &Value) -> Result<String, ChatError> {
    if let Some(err) = response.get("error") {
        let msg = err
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or("Unknown error");
        return Err(ChatError::ApiMessage(msg.to_string()));
    }
    let message = response
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|c| c.get("message"))
        .ok_or_else(|| ChatError::MalformedResponse("no choices in response".to_string()))?;

    let text = match message.get("content").cloned().map(Normalize::normalized) {
        Some(Value::String(s)) => s,
        Some(Value::Array(blocks)) => blocks
            .iter()
            .filter_map(|b| b.get("text").and_then(|t| t.as_str()))
            .map(|t| t.normalized())
            .collect::<String>(),
        _ => String::new(),
    };
    if text.trim().is_empty() {
        return Err(ChatError::MalformedResponse(
            "reply has no text content".to_string(),
        ));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_usage_valid() {
        let response = json!({
            "usage": {"prompt_tokens": 10, "completion_tokens": 20, "total_tokens": 30}
        });
        let usage = parse_usage(&response).unwrap();
        assert_eq!(
            usage,
            TokenUsage {
                prompt_tokens: 10,
                completion_tokens: 20,
                total_tokens: 30
            }
        );
    }

    #[test]
    fn parse_usage_partial() {
        let usage = parse_usage(&json!({"usage": {"prompt_tokens": 5}})).unwrap();
        assert_eq!(usage.prompt_tokens, 5);
        assert_eq!(usage.total_tokens, 0);
    }

    #[test]
    fn parse_usage_missing() {
        assert!(parse_usage(&json!({"choices": []})).is_none());
    }

    #[test]
    fn extract_reply_string_content() {
        let response = json!({
            "choices": [{"message": {"role": "assistant", "content": "Save 20%."}}]
        });
        assert_eq!(extract_reply(&response).unwrap(), "Save 20%.");
    }

    #[test]
    fn extract_reply_chunked_content() {
        let response = json!({
            "choices": [{"message": {"role": "assistant", "content": [
                {"type": "text", "text": "Start "},
                {"type": "text", "text": "early."}
            ]}}]
        });
        assert_eq!(extract_reply(&response).unwrap(), "Start early.");
    }

    #[test]
    fn extract_reply_folds_smart_quotes() {
        let response = json!({
            "choices": [{"message": {"content": "It\u{2019}s \u{201C}diversified\u{201D}."}}]
        });
        assert_eq!(extract_reply(&response).unwrap(), "It's \"diversified\".");
    }

    #[test]
    fn extract_reply_no_choices() {
        let err = extract_reply(&json!({"choices": []})).unwrap_err();
        assert!(matches!(err, ChatError::MalformedResponse(_)));
    }

    #[test]
    fn extract_reply_null_content() {
        let response = json!({"choices": [{"message": {"role": "assistant", "content": null}}]});
        assert!(matches!(
            extract_reply(&response),
            Err(ChatError::MalformedResponse(_))
        ));
    }

    #[test]
    fn extract_reply_error_body() {
        let response = json!({"error": {"message": "quota exceeded"}});
        match extract_reply(&response) {
            Err(ChatError::ApiMessage(msg)) => assert_eq!(msg, "quota exceeded"),
            other => panic!("expected ApiMessage, got {:?}", other),
        }
    }
}
