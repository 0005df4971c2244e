//! Chat history: one bordered block per message, thinking line, scrollbar.

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::core::message::{Message, Role};
use crate::core::session::is_fallback;

use super::super::app::App;
use super::super::constants::{ACCENT, ACCENT_SECONDARY, WELCOME};
use super::super::text::{parse_markdown_line, wrap_message};

/// Columns taken by the "│ " border plus the right margin.
const BLOCK_CHROME: usize = 4;

/// Parameters for rendering a message block.
struct MessageBlockParams<'a> {
    label: &'a str,
    content: &'a str,
    wrap_width: usize,
    is_user: bool,
    is_error: bool,
    time: Option<DateTime<Local>>,
}

/// Add a user or advisor block: "┌─ You 14:32 ──┐", wrapped content, bottom border.
fn add_message_block(lines: &mut Vec<Line<'static>>, p: MessageBlockParams<'_>) {
    let border_style = Style::default().fg(if p.is_user {
        Color::DarkGray
    } else {
        ACCENT_SECONDARY
    });
    let content_width = p.wrap_width.saturating_sub(BLOCK_CHROME).max(1);

    let top_label = match p.time {
        Some(t) => format!("┌─ {} {} ", p.label, t.format("%H:%M")),
        None => format!("┌─ {} ", p.label),
    };
    let trail = p.wrap_width.saturating_sub(top_label.chars().count() + 1);
    lines.push(Line::from(Span::styled(
        format!("{}{}┐", top_label, "─".repeat(trail)),
        border_style,
    )));

    for chunk in wrap_message(p.content.trim(), content_width) {
        let mut spans = vec![Span::styled("│ ", border_style)];
        if p.is_error {
            spans.push(Span::styled(chunk, Style::default().fg(Color::Red)));
        } else if p.is_user {
            spans.push(Span::raw(chunk));
        } else {
            spans.extend(parse_markdown_line(&chunk));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(Span::styled(
        format!("└{}┘", "─".repeat(p.wrap_width.saturating_sub(2))),
        border_style,
    )));
    lines.push(Line::default());
}

/// Build every display line for the visible conversation.
fn build_lines(
    messages: &[&Message],
    times: &[DateTime<Local>],
    wrap_width: usize,
    thinking: bool,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (idx, msg) in messages.iter().enumerate() {
        let is_user = msg.role == Role::User;
        add_message_block(
            &mut lines,
            MessageBlockParams {
                label: if is_user { "You" } else { "Advisor" },
                content: &msg.content,
                wrap_width,
                is_user,
                is_error: !is_user && is_fallback(&msg.content),
                time: times.get(idx).copied(),
            },
        );
    }
    if thinking {
        lines.push(Line::from(Span::styled(
            "  Thinking...",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }
    lines
}

fn draw_welcome(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            WELCOME,
            Style::default().fg(ACCENT).add_modifier(Modifier::ITALIC),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines).wrap(ratatui::widgets::Wrap { trim: true }),
        area,
    );
}

pub(crate) fn draw_history(f: &mut Frame, app: &mut App, history_area: Rect) {
    let thinking = app.is_thinking();
    let messages: Vec<Message> = app.session().view().cloned().collect();
    if messages.is_empty() && !thinking {
        app.last_max_scroll = 0;
        draw_welcome(f, history_area);
        return;
    }

    let history_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(history_area);
    let text_area = history_chunks[0];
    let scrollbar_area = history_chunks[1];

    let refs: Vec<&Message> = messages.iter().collect();
    let lines = build_lines(&refs, &app.message_times, text_area.width as usize, thinking);

    let total_lines = lines.len();
    let visible = text_area.height as usize;
    let max_scroll = total_lines.saturating_sub(visible.max(1));
    app.last_max_scroll = max_scroll;
    let start = app.scroll_line().min(max_scroll);
    let visible_lines: Vec<Line> = lines.into_iter().skip(start).take(visible).collect();

    f.render_widget(Paragraph::new(visible_lines), text_area);

    let mut scrollbar_state = ScrollbarState::default()
        .position(start)
        .content_length(total_lines);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .thumb_symbol("█")
        .thumb_style(Style::default().fg(ACCENT_SECONDARY))
        .track_symbol(Some("│"));
    f.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
}
