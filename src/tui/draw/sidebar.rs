//! Sidebar: settings (clear action), about/disclaimer, message count, notices.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::super::app::App;
use super::super::constants::{ABOUT, ABOUT_TITLE, ACCENT, ACCENT_SECONDARY, DISCLAIMER};

/// Caption under the divider, e.g. "Messages in conversation: 6".
pub(crate) fn message_count_caption(count: usize) -> String {
    format!("Messages in conversation: {}", count)
}

fn divider(width: u16) -> Line<'static> {
    Line::from(Span::styled(
        "─".repeat(width.saturating_sub(2) as usize),
        Style::default().fg(Color::DarkGray),
    ))
}

pub(crate) fn draw_sidebar(f: &mut Frame, app: &mut App, area: Rect) {
    let heading = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(Color::DarkGray);
    let clear_style = if app.is_thinking() {
        muted
    } else {
        Style::default().fg(ACCENT_SECONDARY)
    };

    let mut lines = vec![
        Line::from(Span::styled("Settings", heading)),
        Line::default(),
        Line::from(vec![
            Span::styled("🗑️ Clear Chat History ", clear_style),
            Span::styled("Ctrl+L", muted),
        ]),
        Line::default(),
        divider(area.width),
        Line::from(Span::styled(ABOUT_TITLE, heading)),
        Line::from(ABOUT),
        Line::default(),
        Line::from(vec![
            Span::styled("Disclaimer: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(DISCLAIMER),
        ]),
        Line::default(),
        divider(area.width),
        Line::from(Span::styled(message_count_caption(app.message_count()), muted)),
    ];
    if let Some(notice) = app.active_notice() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(ACCENT),
        )));
    }

    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(muted);
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::message_count_caption;

    #[test]
    fn caption_text() {
        assert_eq!(message_count_caption(0), "Messages in conversation: 0");
        assert_eq!(message_count_caption(6), "Messages in conversation: 6");
    }
}
