//! Completion error types.

/// Errors from a completion call. Never escapes a chat turn: the session turns
/// every variant into a fallback assistant message.
#[derive(Debug)]
pub enum ChatError {
    ApiAuth(String),
    ApiMessage(String),
    /// The API answered but the body had no usable reply text.
    MalformedResponse(String),
    Timeout {
        secs: u64,
    },
    Other(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl std::fmt::Display for ChatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatError::ApiAuth(msg) => write!(f, "{}", msg),
            ChatError::ApiMessage(msg) => write!(f, "{}", msg),
            ChatError::MalformedResponse(what) => write!(f, "malformed response: {}", what),
            ChatError::Timeout { secs } => write!(f, "request timed out after {}s", secs),
            ChatError::Other(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ChatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChatError::Other(e) => e.source(),
            ChatError::ApiAuth(_)
            | ChatError::ApiMessage(_)
            | ChatError::MalformedResponse(_)
            | ChatError::Timeout { .. } => None,
        }
    }
}

/// Status markers for a 401 as they appear in HTTP client error text.
const AUTH_STATUS_MARKERS: [&str; 5] = [
    "status 401",
    "status: 401",
    "status code 401",
    "(401)",
    "401 unauthorized",
];

/// True when the error text reports an HTTP 401, not just any "401" digits.
fn is_auth_failure(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    lower.contains("unauthorized") || AUTH_STATUS_MARKERS.iter().any(|m| lower.contains(m))
}

/// Map async-openai or API errors into ChatError.
pub fn map_api_error<E>(e: E) -> ChatError
where
    E: std::fmt::Display + Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
{
    let s = e.to_string();
    if is_auth_failure(&s) {
        return ChatError::ApiAuth(
            "API error (401): unauthorized. Check MISTRAL_API_KEY (environment, .env, or `advisor-chat config set-api-key`).".to_string(),
        );
    }
    if let Some((_, rest)) = s.split_once("\"message\":\"")
        && let Some((msg, _)) = rest.split_once('"')
    {
        return ChatError::ApiMessage(msg.to_string());
    }
    ChatError::Other(e.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_api_error_401() {
        let e = std::io::Error::other("status 401: Unauthorized");
        let err = map_api_error(e);
        match &err {
            ChatError::ApiAuth(msg) => assert!(msg.contains("MISTRAL_API_KEY")),
            _ => panic!("expected ApiAuth, got {:?}", err),
        }
    }

    #[test]
    fn map_api_error_401_in_parens() {
        let e = std::io::Error::other("API error (401): invalid key");
        assert!(matches!(map_api_error(e), ChatError::ApiAuth(_)));
    }

    #[test]
    fn digits_401_in_message_keep_description() {
        let e = std::io::Error::other(
            r#"{"object":"error","message":"prompt too long: 40123 tokens > 32768"}"#,
        );
        match map_api_error(e) {
            ChatError::ApiMessage(msg) => {
                assert_eq!(msg, "prompt too long: 40123 tokens > 32768")
            }
            other => panic!("expected ApiMessage, got {:?}", other),
        }
    }

    #[test]
    fn map_api_error_json_message() {
        let e = std::io::Error::other(r#"{"object":"error","message":"rate limit exceeded"}"#);
        let err = map_api_error(e);
        match &err {
            ChatError::ApiMessage(msg) => assert_eq!(msg, "rate limit exceeded"),
            _ => panic!("expected ApiMessage, got {:?}", err),
        }
    }

    #[test]
    fn map_api_error_generic() {
        let e = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = map_api_error(e);
        assert!(matches!(err, ChatError::Other(_)));
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn display_is_bare_description() {
        assert_eq!(
            ChatError::ApiMessage("rate limit exceeded".to_string()).to_string(),
            "rate limit exceeded"
        );
        assert_eq!(
            ChatError::Timeout { secs: 60 }.to_string(),
            "request timed out after 60s"
        );
    }
}
