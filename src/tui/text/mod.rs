//! Text utilities: markdown styling and line wrapping for the chat view.

mod markdown;
mod wrap;

pub(crate) use markdown::parse_markdown_line;
pub(crate) use wrap::wrap_message;

#[cfg(test)]
mod tests;
