//! Keyboard shortcuts.
//!
//! | Action        | Keys                      |
//! |---------------|---------------------------|
//! | Send          | Enter                     |
//! | Scroll        | ↑ ↓ PageUp PageDown       |
//! | Clear history | Ctrl+L, Alt+C             |
//! | Quit          | Ctrl+C, Esc               |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Clear the conversation (sidebar action).
    ClearHistory,
    Quit,
}

impl Shortcut {
    pub fn match_key(key: &KeyEvent) -> Option<Shortcut> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Shortcut::Quit)
            }
            KeyCode::Esc => Some(Shortcut::Quit),
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Shortcut::ClearHistory)
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Shortcut::ClearHistory)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Shortcut;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn quit_keys() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Shortcut::Quit)
        );
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Esc, KeyModifiers::empty())),
            Some(Shortcut::Quit)
        );
    }

    #[test]
    fn clear_history_keys() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('l'), KeyModifiers::CONTROL)),
            Some(Shortcut::ClearHistory)
        );
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('c'), KeyModifiers::ALT)),
            Some(Shortcut::ClearHistory)
        );
    }

    #[test]
    fn plain_chars_are_not_shortcuts() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('l'), KeyModifiers::empty())),
            None
        );
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('c'), KeyModifiers::SHIFT)),
            None
        );
    }

    #[test]
    fn release_events_ignored() {
        let mut k = key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        k.kind = KeyEventKind::Release;
        assert_eq!(Shortcut::match_key(&k), None);
    }
}
