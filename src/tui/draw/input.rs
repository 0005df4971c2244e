//! Input box with placeholder, busy state, and key hints.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::super::app::App;
use super::super::constants::{ACCENT, INPUT_PLACEHOLDER};

pub(crate) fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let thinking = app.is_thinking();
    let border_color = if thinking { Color::DarkGray } else { ACCENT };
    let hint = if thinking {
        " Thinking... "
    } else {
        " Enter send · Ctrl+L clear · Esc quit "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title_bottom(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        )));

    let body = if app.input.is_empty() {
        Line::from(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(vec![
            Span::raw(app.input.clone()),
            Span::styled("▌", Style::default().fg(ACCENT)),
        ])
    };
    f.render_widget(
        Paragraph::new(body).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
