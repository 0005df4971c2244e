//! Centered masked API key entry.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::super::app::App;
use super::super::constants::{ACCENT, KEY_MISSING_INFO};

const PROMPT_WIDTH: u16 = 64;
const PROMPT_HEIGHT: u16 = 9;

pub(crate) fn draw_key_prompt(f: &mut Frame, app: &App, area: Rect) {
    let Some(prompt) = app.key_prompt.as_ref() else {
        return;
    };
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(PROMPT_HEIGHT)])
        .flex(Flex::Center)
        .split(area);
    let popup = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(PROMPT_WIDTH.min(area.width))])
        .flex(Flex::Center)
        .split(vertical[0])[0];

    let mut lines = vec![
        Line::from(KEY_MISSING_INFO),
        Line::default(),
        Line::from(vec![
            Span::styled("MISTRAL_API_KEY: ", Style::default().fg(ACCENT)),
            Span::raw(prompt.masked()),
            Span::styled("▌", Style::default().fg(ACCENT)),
        ]),
        Line::default(),
    ];
    match &prompt.error {
        Some(err) => lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(Color::Red),
        ))),
        None => lines.push(Line::from(Span::styled(
            "Enter to continue · Esc to quit",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(" API key ");
    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        popup,
    );
}
