//! Text normalization for message content: smart-quote folding then Unicode NFC.
//!
//! Every piece of text that enters the session, leaves for the API, or is shown
//! as an error goes through [`normalize_text`]. Values that are not text pass
//! through the [`Normalize`] impls untouched.

use std::borrow::Cow;

use serde_json::Value;
use unicode_normalization::UnicodeNormalization;

/// Smart quotes folded to their ASCII counterparts.
const QUOTE_FOLDS: [(char, char); 4] = [
    ('\u{2018}', '\''),
    ('\u{2019}', '\''),
    ('\u{201C}', '"'),
    ('\u{201D}', '"'),
];

fn fold_quote(c: char) -> char {
    QUOTE_FOLDS
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
        .unwrap_or(c)
}

/// Fold smart quotes to ASCII and apply NFC composition.
///
/// Total and idempotent: neither step can reintroduce a smart quote, and NFC is
/// stable under repetition.
pub fn normalize_text(s: &str) -> String {
    s.chars().map(fold_quote).nfc().collect()
}

/// Values that can be normalized. Non-text values come back unchanged.
pub trait Normalize {
    type Output;

    fn normalized(self) -> Self::Output;
}

impl Normalize for &str {
    type Output = String;

    fn normalized(self) -> String {
        normalize_text(self)
    }
}

impl Normalize for String {
    type Output = String;

    fn normalized(self) -> String {
        normalize_text(&self)
    }
}

impl Normalize for Cow<'_, str> {
    type Output = String;

    fn normalized(self) -> String {
        normalize_text(&self)
    }
}

/// Only `Value::String` is rewritten; numbers, arrays, objects and nulls pass through.
impl Normalize for Value {
    type Output = Value;

    fn normalized(self) -> Value {
        match self {
            Value::String(s) => Value::String(normalize_text(&s)),
            other => other,
        }
    }
}
