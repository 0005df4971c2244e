//! TUI rendering: header, chat history, input, and sidebar.

mod header;
mod history;
mod input;
mod key_prompt;
mod sidebar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::app::App;
use super::constants::{INPUT_LINES, SIDEBAR_WIDTH};

/// Header height: title row plus separator.
const HEADER_HEIGHT: u16 = 2;

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
        .split(area);
    header::draw_header(f, app, rows[0]);

    if app.key_prompt.is_some() {
        key_prompt::draw_key_prompt(f, app, rows[1]);
        return;
    }

    // Narrow terminals drop the sidebar rather than squeezing the chat.
    let sidebar_width = if rows[1].width >= SIDEBAR_WIDTH * 2 {
        SIDEBAR_WIDTH
    } else {
        0
    };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(sidebar_width)])
        .split(rows[1]);

    let chat = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(INPUT_LINES)])
        .split(columns[0]);
    history::draw_history(f, app, chat[0]);
    input::draw_input(f, app, chat[1]);

    if sidebar_width > 0 {
        sidebar::draw_sidebar(f, app, columns[1]);
    }
}
