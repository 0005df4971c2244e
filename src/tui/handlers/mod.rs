//! Event handlers for the TUI: keyboard and mouse.

mod chat_spawn;
mod input;
mod key_prompt;

use crossterm::event::{KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use std::sync::Arc;
use std::sync::mpsc::{self, TryRecvError};

use tokio::runtime::Runtime;

use crate::core::config::Settings;
use crate::core::llm::{ApiCompletion, ChatError, Completed};

use super::app::App;
use super::constants;
use super::shortcuts::Shortcut;

/// Receiver for the completion in flight. At most one exists per session.
pub struct PendingChat {
    pub result_rx: mpsc::Receiver<Result<Completed, ChatError>>,
}

/// Result of handling an event: continue the loop or exit.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HandleResult {
    Continue,
    Break,
}

/// Context for key event handling. Bundles mutable state to reduce parameter count.
pub struct HandleKeyContext<'a> {
    pub app: &'a mut App,
    pub settings: &'a Settings,
    /// `None` until an API key is known.
    pub client: &'a mut Option<Arc<ApiCompletion>>,
    pub pending_chat: &'a mut Option<PendingChat>,
    pub rt: &'a Arc<Runtime>,
}

/// Record the in-flight reply once it arrives. A worker that exits without
/// sending still ends the turn, with a fallback message.
pub fn poll_pending_chat(app: &mut App, pending_chat: &mut Option<PendingChat>) {
    let Some(chat) = pending_chat.as_ref() else {
        return;
    };
    let outcome = match chat.result_rx.try_recv() {
        Ok(result) => result,
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Disconnected) => {
            log::error!("Completion worker exited without a result");
            Err(ChatError::Other(
                "completion worker stopped before replying".into(),
            ))
        }
    };
    app.finish_reply(outcome);
    *pending_chat = None;
}

/// Handle a mouse event (wheel scrolls the chat).
pub fn handle_mouse(mouse: MouseEvent, app: &mut App) -> HandleResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.scroll_up(constants::SCROLL_LINES_SMALL),
        MouseEventKind::ScrollDown => app.scroll_down(constants::SCROLL_LINES_SMALL),
        _ => {}
    }
    HandleResult::Continue
}

/// Handle a key event. Returns HandleResult::Break to exit the main loop.
pub fn handle_key(key: KeyEvent, ctx: HandleKeyContext<'_>) -> HandleResult {
    let HandleKeyContext {
        app,
        settings,
        client,
        pending_chat,
        rt,
    } = ctx;

    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }

    if app.key_prompt.is_some() {
        return key_prompt::handle_key_prompt(key.code, key.modifiers, app, settings, client);
    }

    match Shortcut::match_key(&key) {
        Some(Shortcut::Quit) => return HandleResult::Break,
        Some(Shortcut::ClearHistory) => {
            // The reply of an in-flight request belongs to the current session.
            if pending_chat.is_none() {
                app.clear_history();
            } else {
                app.set_notice("Wait for the reply before clearing");
            }
            return HandleResult::Continue;
        }
        None => {}
    }

    input::handle_main_input(key.code, key.modifiers, app, client, pending_chat, rt)
}
