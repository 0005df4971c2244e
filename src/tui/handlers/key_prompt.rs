//! Masked API key entry shown when no key was found at startup.

use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::Arc;

use crate::core::api_key;
use crate::core::config::{Config, Settings};
use crate::core::llm::ApiCompletion;

use super::super::app::App;
use super::super::constants::KEY_MISSING_INFO;
use super::HandleResult;

/// Handle keys while the key prompt is open. Enter accepts, Esc/Ctrl+C quits.
pub(crate) fn handle_key_prompt(
    key_code: KeyCode,
    key_modifiers: KeyModifiers,
    app: &mut App,
    settings: &Settings,
    client: &mut Option<Arc<ApiCompletion>>,
) -> HandleResult {
    let Some(prompt) = app.key_prompt.as_mut() else {
        return HandleResult::Continue;
    };
    match (key_code, key_modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.exit_message = Some(KEY_MISSING_INFO.to_string());
            return HandleResult::Break;
        }
        (KeyCode::Enter, _) => {
            let key = prompt.input.trim().to_string();
            if key.is_empty() {
                prompt.error = Some("The API key cannot be empty".to_string());
                return HandleResult::Continue;
            }
            let config = Config::new(settings, &key);
            *client = Some(Arc::new(ApiCompletion::new(&config)));
            app.key_prompt = None;
            match api_key::store_api_key(&key) {
                Ok(_) => app.set_notice("API key saved"),
                Err(e) => {
                    log::warn!("Could not store API key: {}", e);
                    app.set_notice("API key kept for this run only");
                }
            }
        }
        (KeyCode::Backspace, _) => {
            prompt.input.pop();
            prompt.error = None;
        }
        (KeyCode::Char(c), mods) if !mods.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            prompt.input.push(c);
            prompt.error = None;
        }
        _ => {}
    }
    HandleResult::Continue
}
