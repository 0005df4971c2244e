//! Handler for the chat input (typing, send, scroll).

use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::core::llm::ApiCompletion;

use super::super::app::App;
use super::super::constants;
use super::chat_spawn;
use super::{HandleResult, PendingChat};

/// Handle main input keys (when the key prompt is closed).
pub(crate) fn handle_main_input(
    key_code: KeyCode,
    key_modifiers: KeyModifiers,
    app: &mut App,
    client: &Option<Arc<ApiCompletion>>,
    pending_chat: &mut Option<PendingChat>,
    rt: &Arc<Runtime>,
) -> HandleResult {
    match key_code {
        KeyCode::Enter => {
            // Empty submissions never reach the session.
            if pending_chat.is_none()
                && let Some(client) = client
                && let Some(request) = app.submit_input()
            {
                *pending_chat = Some(chat_spawn::spawn_completion(
                    rt,
                    Arc::clone(client),
                    request,
                ));
            }
        }
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Up => app.scroll_up(constants::SCROLL_LINES_SMALL),
        KeyCode::Down => app.scroll_down(constants::SCROLL_LINES_SMALL),
        KeyCode::PageUp => app.scroll_up(constants::SCROLL_LINES_PAGE),
        KeyCode::PageDown => app.scroll_down(constants::SCROLL_LINES_PAGE),
        KeyCode::Char(c) => {
            // Ignore Ctrl/Alt chords that aren't shortcuts.
            if !key_modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                app.input.push(c);
            }
        }
        _ => {}
    }
    HandleResult::Continue
}
