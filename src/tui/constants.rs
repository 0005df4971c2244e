//! TUI constants: colors, layout, timing, and static text.

use ratatui::style::Color;

/// Accent gold (#F2C14E), money-ish.
pub(super) const ACCENT: Color = Color::Rgb(242, 193, 78);

/// Secondary accent, soft green (#8FD694).
pub(super) const ACCENT_SECONDARY: Color = Color::Rgb(143, 214, 148);

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Scroll amount for arrow keys and mouse wheel.
pub(crate) const SCROLL_LINES_SMALL: usize = 3;

/// Scroll amount for PageUp/PageDown.
pub(crate) const SCROLL_LINES_PAGE: usize = 10;

/// Input box height including borders.
pub(crate) const INPUT_LINES: u16 = 5;

/// Sidebar width in columns.
pub(crate) const SIDEBAR_WIDTH: u16 = 34;

/// How long a notice (e.g. "Chat cleared") stays visible.
pub(crate) const NOTICE_SECS: u64 = 3;

pub(super) const LOGO_IDLE: &str = "💰";

/// Spinner frames for the "thinking" indicator (braille pattern, 4 frames).
pub(super) const LOGO_THINKING: &[&str] = &["⠋", "⠙", "⠹", "⠸"];

pub(super) const INPUT_PLACEHOLDER: &str = "Type your financial question here...";

pub(super) const WELCOME: &str =
    "Ask me anything about budgeting, investing, savings, and personal finance!";

pub(super) const ABOUT_TITLE: &str = "About";

pub(super) const ABOUT: &str =
    "This is a financial advisor chatbot powered by Mistral AI.";

pub(super) const DISCLAIMER: &str = "This bot provides educational information only. \
Always consult with a qualified financial professional for personalized advice.";

/// Shown on the key prompt and printed when the user leaves it without a key.
pub(crate) const KEY_MISSING_INFO: &str =
    "🔑 Please add your MISTRAL_API_KEY to the environment or .env, or enter it below.";
