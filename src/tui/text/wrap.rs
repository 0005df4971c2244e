//! Line wrapping for the chat view.

/// Wrap one paragraph to `width` columns (textwrap handles UTF-8 and wide chars).
fn wrap_line(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![s.to_string()];
    }
    textwrap::wrap(s, width)
        .into_iter()
        .map(|cow| cow.into_owned())
        .collect()
}

/// Split a message on its own newlines, then wrap each line to `width`.
/// Blank lines are kept so paragraphs stay separated.
pub(crate) fn wrap_message(msg: &str, width: usize) -> Vec<String> {
    msg.split('\n')
        .flat_map(|line| {
            if line.trim().is_empty() {
                vec![String::new()]
            } else {
                wrap_line(line, width)
            }
        })
        .collect()
}
