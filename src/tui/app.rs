//! TUI application state: the live session, input, scroll, key prompt.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::core::llm::{ChatError, Completed, CompletionRequest, TokenUsage};
use crate::core::session::{Session, SessionSlot};

use super::constants::NOTICE_SECS;

/// Masked API key entry, shown when no key was found at startup.
#[derive(Default)]
pub struct KeyPrompt {
    pub input: String,
    pub error: Option<String>,
}

impl KeyPrompt {
    /// Input as it is drawn: one bullet per character.
    pub fn masked(&self) -> String {
        "•".repeat(self.input.chars().count())
    }
}

/// Scroll position: either a specific line index, or "at bottom" (follow new content).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ScrollPosition {
    #[default]
    Bottom,
    Line(usize),
}

pub struct App {
    session: SessionSlot,
    /// Model used for completions (shown in the header).
    pub(crate) model_id: String,
    /// User input in the text field.
    pub(crate) input: String,
    pub(crate) scroll: ScrollPosition,
    pub(crate) last_max_scroll: usize,
    /// Set while a completion is in flight; drives the spinner.
    pub(crate) thinking_since: Option<Instant>,
    /// Local time each displayed message was added; parallel to the session view.
    pub(crate) message_times: Vec<DateTime<Local>>,
    pub(crate) key_prompt: Option<KeyPrompt>,
    /// Transient notice in the sidebar (text, expiry).
    pub(crate) notice: Option<(String, Instant)>,
    /// Printed after the terminal is restored.
    pub(crate) exit_message: Option<String>,
}

impl App {
    pub fn new(model_id: String, needs_key: bool) -> Self {
        let mut session = SessionSlot::new();
        session.initialize();
        Self {
            session,
            model_id,
            input: String::new(),
            scroll: ScrollPosition::default(),
            last_max_scroll: 0,
            thinking_since: None,
            message_times: Vec::new(),
            key_prompt: needs_key.then(KeyPrompt::default),
            notice: None,
            exit_message: None,
        }
    }

    /// The live session, seeded on first access.
    pub(crate) fn session(&mut self) -> &mut Session {
        self.session.initialize()
    }

    pub(crate) fn message_count(&self) -> usize {
        self.session.get().map_or(0, Session::message_count)
    }

    pub(crate) fn token_usage(&self) -> Option<TokenUsage> {
        self.session.get().and_then(Session::last_usage)
    }

    pub(crate) fn is_thinking(&self) -> bool {
        self.thinking_since.is_some()
    }

    /// Take the input as a user turn. Returns the request to send, or `None`
    /// when the input is blank or a reply is still pending.
    pub(crate) fn submit_input(&mut self) -> Option<CompletionRequest> {
        let text = self.input.trim().to_string();
        if text.is_empty() || self.is_thinking() {
            return None;
        }
        let model_id = self.model_id.clone();
        let session = self.session();
        if let Err(e) = session.append_user(&text) {
            log::debug!("Submission rejected: {}", e);
            return None;
        }
        let request = session.completion_request(&model_id);
        self.input.clear();
        self.message_times.push(Local::now());
        self.thinking_since = Some(Instant::now());
        self.scroll = ScrollPosition::Bottom;
        Some(request)
    }

    /// Record the completion outcome as the next assistant message.
    pub(crate) fn finish_reply(&mut self, outcome: Result<Completed, ChatError>) {
        self.session().finish_turn(outcome);
        self.message_times.push(Local::now());
        self.thinking_since = None;
        self.scroll = ScrollPosition::Bottom;
    }

    /// Clear the conversation. Returns false while a reply is pending.
    pub(crate) fn clear_history(&mut self) -> bool {
        if self.is_thinking() {
            self.set_notice("Wait for the reply before clearing");
            return false;
        }
        self.session.reset();
        self.message_times.clear();
        self.scroll = ScrollPosition::default();
        self.last_max_scroll = 0;
        self.set_notice("Chat history cleared");
        true
    }

    pub(crate) fn set_notice(&mut self, text: &str) {
        self.notice = Some((
            text.to_string(),
            Instant::now() + Duration::from_secs(NOTICE_SECS),
        ));
    }

    /// Current notice, dropping it once expired.
    pub(crate) fn active_notice(&mut self) -> Option<&str> {
        if self.notice.as_ref().is_some_and(|(_, until)| *until <= Instant::now()) {
            self.notice = None;
        }
        self.notice.as_ref().map(|(text, _)| text.as_str())
    }

    /// Must be called before scroll_up/scroll_down when at bottom.
    pub(crate) fn materialize_scroll(&mut self) {
        if self.scroll == ScrollPosition::Bottom {
            self.scroll = ScrollPosition::Line(self.last_max_scroll);
        }
    }

    pub(crate) fn scroll_down(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            let next = (pos + n).min(self.last_max_scroll);
            self.scroll = if next == self.last_max_scroll {
                ScrollPosition::Bottom
            } else {
                ScrollPosition::Line(next)
            };
        }
    }

    pub(crate) fn scroll_up(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            self.scroll = ScrollPosition::Line(pos.saturating_sub(n));
        }
    }

    /// Resolve scroll position to a concrete line index.
    pub(crate) fn scroll_line(&self) -> usize {
        match self.scroll {
            ScrollPosition::Line(n) => n.min(self.last_max_scroll),
            ScrollPosition::Bottom => self.last_max_scroll,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::Role;

    fn app() -> App {
        App::new("mistral-large-latest".to_string(), false)
    }

    #[test]
    fn submit_builds_request_and_starts_thinking() {
        let mut app = app();
        app.input = "  How do I build an emergency fund?  ".to_string();
        let request = app.submit_input().expect("request");
        assert_eq!(request.model, "mistral-large-latest");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[1].content, "How do I build an emergency fund?");
        assert!(app.input.is_empty());
        assert!(app.is_thinking());
        assert_eq!(app.message_count(), 1);
    }

    #[test]
    fn blank_input_is_suppressed() {
        let mut app = app();
        app.input = "   ".to_string();
        assert!(app.submit_input().is_none());
        assert_eq!(app.message_count(), 0);
        assert!(!app.is_thinking());
    }

    #[test]
    fn no_second_submission_while_thinking() {
        let mut app = app();
        app.input = "first".to_string();
        app.submit_input().unwrap();
        app.input = "second".to_string();
        assert!(app.submit_input().is_none());
        assert_eq!(app.input, "second", "input kept for later");
        assert_eq!(app.message_count(), 1);
    }

    #[test]
    fn failed_reply_is_shown_as_fallback() {
        let mut app = app();
        app.input = "q".to_string();
        app.submit_input().unwrap();
        app.finish_reply(Err(ChatError::ApiMessage("rate limit exceeded".to_string())));
        assert!(!app.is_thinking());
        let last = app.session().view().last().cloned().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.content, "⚠️ Error: rate limit exceeded");
        assert_eq!(app.message_times.len(), 2);
    }

    #[test]
    fn clear_history_resets_count() {
        let mut app = app();
        app.input = "q".to_string();
        app.submit_input().unwrap();
        assert!(!app.clear_history(), "refused while thinking");
        app.finish_reply(Ok(Completed {
            content: "a".to_string(),
            usage: None,
        }));
        assert_eq!(app.message_count(), 2);
        assert!(app.clear_history());
        assert_eq!(app.message_count(), 0);
        assert!(app.message_times.is_empty());
        assert_eq!(app.active_notice(), Some("Chat history cleared"));
    }

    #[test]
    fn key_prompt_masks_input() {
        let mut app = App::new("m".to_string(), true);
        let prompt = app.key_prompt.as_mut().unwrap();
        prompt.input = "sk-abc".to_string();
        assert_eq!(prompt.masked(), "••••••");
    }

    #[test]
    fn scrolling_back_to_end_follows_new_content() {
        let mut app = app();
        app.last_max_scroll = 20;
        app.scroll_up(5);
        assert_eq!(app.scroll, ScrollPosition::Line(15));
        app.scroll_down(10);
        assert_eq!(app.scroll, ScrollPosition::Bottom);
        assert_eq!(app.scroll_line(), 20);
    }
}
