use ratatui::style::Modifier;
use ratatui::text::Span;

use super::{parse_markdown_line, wrap_message};

fn text_of(spans: &[Span<'_>]) -> String {
    spans.iter().map(|s| s.content.as_ref()).collect()
}

#[test]
fn wrap_message_keeps_paragraph_breaks() {
    let lines = wrap_message("Budget first.\n\nThen invest.", 40);
    assert_eq!(lines, vec!["Budget first.", "", "Then invest."]);
}

#[test]
fn wrap_message_wraps_long_lines() {
    let lines = wrap_message("aaa bbb ccc ddd", 7);
    assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
}

#[test]
fn wrap_message_zero_width_is_passthrough() {
    assert_eq!(wrap_message("one line", 0), vec!["one line"]);
}

#[test]
fn heading_drops_hashes() {
    let spans = parse_markdown_line("## Emergency fund");
    assert_eq!(text_of(&spans), "Emergency fund");
    assert!(spans[0].style.add_modifier.contains(Modifier::BOLD));
}

#[test]
fn bullets_become_dots() {
    assert_eq!(text_of(&parse_markdown_line("- Track spending")), "• Track spending");
    assert_eq!(text_of(&parse_markdown_line("* Cut fees")), "• Cut fees");
}

#[test]
fn numbered_list_keeps_number() {
    assert_eq!(text_of(&parse_markdown_line("2. Pay debt")), "2. Pay debt");
    assert_eq!(text_of(&parse_markdown_line("2) Pay debt")), "2) Pay debt");
}

#[test]
fn bold_code_and_italic() {
    let spans = parse_markdown_line("Save **20%** in an `index fund`, *ideally* monthly");
    assert_eq!(text_of(&spans), "Save 20% in an index fund, ideally monthly");
    let bold = spans.iter().find(|s| s.content == "20%").unwrap();
    assert!(bold.style.add_modifier.contains(Modifier::BOLD));
    let italic = spans.iter().find(|s| s.content == "ideally").unwrap();
    assert!(italic.style.add_modifier.contains(Modifier::ITALIC));
}

#[test]
fn unclosed_markers_stay_literal() {
    assert_eq!(text_of(&parse_markdown_line("5 ** 2 and `x")), "5 ** 2 and `x");
}

#[test]
fn indentation_is_preserved() {
    assert_eq!(text_of(&parse_markdown_line("  - nested")), "  • nested");
}
