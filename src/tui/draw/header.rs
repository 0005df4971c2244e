//! Header: logo or spinner, title, model name, token usage.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::app::TITLE;
use crate::core::llm::TokenUsage;

use super::super::app::App;
use super::super::constants::{ACCENT, LOGO_IDLE, LOGO_THINKING};

/// Spinner frame duration in milliseconds.
const SPINNER_FRAME_MS: u128 = 120;

/// Logo, or a spinner frame while a reply is pending.
pub(crate) fn logo(app: &App) -> &'static str {
    match app.thinking_since {
        Some(since) => {
            let frame = (since.elapsed().as_millis() / SPINNER_FRAME_MS) as usize;
            LOGO_THINKING[frame % LOGO_THINKING.len()]
        }
        None => LOGO_IDLE,
    }
}

/// Compact token usage: "1.2k tok (800 in / 400 out)".
pub(crate) fn format_usage(usage: &TokenUsage) -> String {
    fn compact(n: u64) -> String {
        if n >= 1_000 {
            format!("{:.1}k", n as f64 / 1_000.0)
        } else {
            n.to_string()
        }
    }
    format!(
        "{} tok ({} in / {} out)",
        compact(usage.total_tokens),
        compact(usage.prompt_tokens),
        compact(usage.completion_tokens)
    )
}

pub(crate) fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let right = match app.token_usage() {
        Some(usage) => format!("{} · {}", app.model_id, format_usage(&usage)),
        None => app.model_id.clone(),
    };
    let right_width = (right.chars().count() as u16 + 1).min(area.width / 2);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right_width)])
        .split(area);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let title = Line::from(vec![
        Span::styled(format!(" {} ", logo(app)), Style::default().fg(ACCENT)),
        Span::styled(
            TITLE,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(title).block(block.clone()), chunks[0]);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            right,
            Style::default().fg(Color::DarkGray),
        )))
        .block(block),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_is_compact() {
        let usage = TokenUsage {
            prompt_tokens: 850,
            completion_tokens: 450,
            total_tokens: 1300,
        };
        assert_eq!(format_usage(&usage), "1.3k tok (850 in / 450 out)");
    }

    #[test]
    fn logo_idle_without_pending_reply() {
        let app = App::new("m".to_string(), false);
        assert_eq!(logo(&app), LOGO_IDLE);
    }
}
