//! Inline Markdown for replies: headings, bullet and numbered lists, **bold**, *italic*, `code`.

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::tui::constants::{ACCENT, ACCENT_SECONDARY};

/// Style one display line of Markdown.
pub(crate) fn parse_markdown_line(s: &str) -> Vec<Span<'static>> {
    let trimmed = s.trim_start();
    let indent = &s[..s.len() - trimmed.len()];
    let mut spans = Vec::new();
    if !indent.is_empty() {
        spans.push(Span::raw(indent.to_string()));
    }

    if trimmed.starts_with('#') {
        let content = trimmed.trim_start_matches('#').trim_start();
        spans.push(Span::styled(
            content.to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
        return spans;
    }
    if let Some(rest) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        spans.push(Span::styled("• ", Style::default().fg(ACCENT)));
        spans.extend(parse_inline(rest));
        return spans;
    }
    if let Some((num, rest)) = numbered_list_prefix(trimmed) {
        spans.push(Span::styled(format!("{} ", num), Style::default().fg(ACCENT)));
        spans.extend(parse_inline(rest));
        return spans;
    }
    spans.extend(parse_inline(trimmed));
    spans
}

/// "N. " or "N) " at the start. Returns ("N.", rest).
fn numbered_list_prefix(s: &str) -> Option<(&str, &str)> {
    let digits = s.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let rest = &s[digits..];
    if rest.starts_with(". ") || rest.starts_with(") ") {
        Some((&s[..digits + 1], &rest[2..]))
    } else {
        None
    }
}

/// Inline markers in the order they are tried at a given position.
const MARKERS: [(&str, Marker); 3] = [
    ("**", Marker::Bold),
    ("`", Marker::Code),
    ("*", Marker::Italic),
];

#[derive(Clone, Copy)]
enum Marker {
    Bold,
    Code,
    Italic,
}

impl Marker {
    fn style(self) -> Style {
        match self {
            Marker::Bold => Style::default().add_modifier(Modifier::BOLD),
            Marker::Code => Style::default().fg(ACCENT_SECONDARY),
            Marker::Italic => Style::default().add_modifier(Modifier::ITALIC),
        }
    }
}

/// Parse **bold**, `code` and *italic* in the rest of a line. Unclosed markers stay literal.
fn parse_inline(s: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = s;
    'outer: while !rest.is_empty() {
        for (token, marker) in MARKERS {
            if let Some(after) = rest.strip_prefix(token)
                && let Some(end) = after.find(token)
                && end > 0
            {
                if !plain.is_empty() {
                    spans.push(Span::raw(std::mem::take(&mut plain)));
                }
                spans.push(Span::styled(after[..end].to_string(), marker.style()));
                rest = &after[end + token.len()..];
                continue 'outer;
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            plain.push(c);
        }
        rest = chars.as_str();
    }
    if !plain.is_empty() {
        spans.push(Span::raw(plain));
    }
    spans
}
