//! Conversation session: the append-only message log behind one chat.
//!
//! A session always starts with the advisory system prompt. After that it only
//! grows, one user message per submission and one assistant message per
//! completion (a real reply or a fallback describing the failure). Clearing the
//! chat replaces the whole session with a freshly seeded one.

use crate::core::llm::{ChatError, Completed, Completion, CompletionRequest, TokenUsage};
use crate::core::message::{Message, Role};
use crate::core::normalize::normalize_text;

/// Instruction prompt seeded as the first message of every session.
pub const SYSTEM_PROMPT: &str = "You are a helpful financial advisor assistant.
Provide advice on budgeting, investing, savings, and personal finance.
Keep answers clear and practical. Always mention this is educational, not professional financial advice.";

/// Prefix of the assistant message that stands in for a failed completion.
pub const FALLBACK_PREFIX: &str = "⚠️ Error: ";

/// Rejected session mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("message is empty")]
    EmptyInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    /// A user turn was appended and its reply has not been recorded yet.
    AwaitingReply,
}

#[derive(Debug, Clone)]
pub struct Session {
    messages: Vec<Message>,
    state: SessionState,
    last_usage: Option<TokenUsage>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session holding only the system prompt.
    pub fn new() -> Self {
        Self {
            messages: vec![Message::system(SYSTEM_PROMPT)],
            state: SessionState::Idle,
            last_usage: None,
        }
    }

    /// All messages, system prompt first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Never true: the system prompt is always present.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.state == SessionState::AwaitingReply
    }

    /// Token usage of the most recent successful completion.
    pub fn last_usage(&self) -> Option<TokenUsage> {
        self.last_usage
    }

    /// Normalize `input` and append it as a user message.
    pub fn append_user(&mut self, input: &str) -> Result<&Message, ValidationError> {
        let content = normalize_text(input);
        if content.trim().is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        self.state = SessionState::AwaitingReply;
        Ok(self.push(Message {
            role: Role::User,
            content,
        }))
    }

    /// Normalize `content` and append it as an assistant message.
    pub fn append_assistant(&mut self, content: &str) -> &Message {
        self.state = SessionState::Idle;
        self.push(Message::assistant(content))
    }

    /// The request for the next reply: the whole history, system prompt included.
    pub fn completion_request(&self, model: &str) -> CompletionRequest {
        CompletionRequest::new(model, &self.messages)
    }

    /// Record the outcome of a completion call as the next assistant message.
    /// A failure becomes a visible fallback message; nothing is propagated.
    pub fn finish_turn(&mut self, outcome: Result<Completed, ChatError>) -> &Message {
        match outcome {
            Ok(completed) => {
                if completed.usage.is_some() {
                    self.last_usage = completed.usage;
                }
                self.append_assistant(&completed.content)
            }
            Err(e) => {
                log::warn!("Completion failed: {}", e);
                let reply = fallback_reply(&e);
                self.append_assistant(&reply)
            }
        }
    }

    /// Send the history to `client` once and append the reply (or fallback).
    pub async fn request_completion<C: Completion>(&mut self, client: &C, model: &str) -> &Message {
        let request = self.completion_request(model);
        let outcome = client.complete(&request).await;
        self.finish_turn(outcome)
    }

    /// Messages to display: everything except the system prompt, in order.
    /// The iterator is `Clone`, so a view can be walked more than once.
    pub fn view(&self) -> impl Iterator<Item = &Message> + Clone + '_ {
        self.messages.iter().filter(|m| m.role != Role::System)
    }

    /// Number of non-system messages.
    pub fn message_count(&self) -> usize {
        self.view().count()
    }

    fn push(&mut self, message: Message) -> &Message {
        log::debug!(
            "Appended {} message ({} in session)",
            message.role.as_str(),
            self.messages.len() + 1
        );
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }
}

/// Assistant text standing in for a failed completion.
pub fn fallback_reply(err: &ChatError) -> String {
    format!("{}{}", FALLBACK_PREFIX, normalize_text(&err.to_string()))
}

/// True when `content` is a fallback produced by [`fallback_reply`].
pub fn is_fallback(content: &str) -> bool {
    content.starts_with(FALLBACK_PREFIX)
}

/// Holder for the live session of one UI context.
///
/// Starts uninitialized; [`SessionSlot::initialize`] seeds it on first use.
#[derive(Debug, Default)]
pub struct SessionSlot {
    session: Option<Session>,
}

impl SessionSlot {
    pub fn new() -> Self {
        Self { session: None }
    }

    pub fn is_initialized(&self) -> bool {
        self.session.is_some()
    }

    /// Create the seeded session if none exists; otherwise leave it alone.
    pub fn initialize(&mut self) -> &mut Session {
        self.session.get_or_insert_with(|| {
            log::debug!("Session initialized");
            Session::new()
        })
    }

    pub fn get(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Discard the session and seed a new one.
    pub fn reset(&mut self) -> &mut Session {
        let dropped = self.session.take().map(|s| s.message_count()).unwrap_or(0);
        log::info!("Session cleared ({} messages discarded)", dropped);
        self.initialize()
    }
}
