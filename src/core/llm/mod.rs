//! Completion boundary: one request with the whole conversation, one reply back.

mod error;
mod response;

use std::future::Future;
use std::time::Duration;

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use serde::Serialize;
use serde_json::Value;

use crate::core::config::Config;
use crate::core::message::Message;

pub use error::{ChatError, map_api_error};
pub use response::TokenUsage;

/// Sampling temperature sent with every request.
pub const TEMPERATURE: f32 = 0.7;

/// Maximum reply length in tokens.
pub const MAX_TOKENS: u32 = 500;

/// Body of a chat-completions request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Request for `model` with the fixed sampling parameters.
    /// Message contents are re-normalized for transmission.
    pub fn new<'a>(model: &str, messages: impl IntoIterator<Item = &'a Message>) -> Self {
        Self {
            model: model.to_string(),
            messages: messages.into_iter().map(Message::to_outbound).collect(),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}

/// A successful completion.
#[derive(Debug, Clone, PartialEq)]
pub struct Completed {
    pub content: String,
    pub usage: Option<TokenUsage>,
}

/// The completion collaborator. Implementations make a single attempt and
/// report failure as `Err`; callers decide what a failure becomes.
pub trait Completion {
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl Future<Output = Result<Completed, ChatError>> + Send;
}

/// Run `fut`, giving up with [`ChatError::Timeout`] after `limit`.
pub async fn with_timeout<F, T>(limit: Duration, fut: F) -> Result<T, ChatError>
where
    F: Future<Output = Result<T, ChatError>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(ChatError::Timeout {
            secs: limit.as_secs(),
        }),
    }
}

/// Completion against the configured OpenAI-compatible endpoint.
#[derive(Debug, Clone)]
pub struct ApiCompletion {
    client: Client<OpenAIConfig>,
    timeout: Duration,
}

impl ApiCompletion {
    pub fn new(config: &Config) -> Self {
        log::info!(
            "Completion client: endpoint={}, model={}, timeout={}s",
            config.base_url,
            config.model_id,
            config.timeout.as_secs()
        );
        Self {
            client: Client::with_config(config.openai_config.clone()),
            timeout: config.timeout,
        }
    }

    async fn send(&self, request: &CompletionRequest) -> Result<Completed, ChatError> {
        let body: Value = self
            .client
            .chat()
            .create_byot::<_, Value>(request)
            .await
            .map_err(map_api_error)?;
        let content = response::extract_reply(&body)?;
        Ok(Completed {
            content,
            usage: response::parse_usage(&body),
        })
    }
}

impl Completion for ApiCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completed, ChatError> {
        log::debug!(
            "Requesting completion: model={}, messages={}",
            request.model,
            request.messages.len()
        );
        with_timeout(self.timeout, self.send(request)).await
    }
}
