use std::borrow::Cow;

use crate::error::{LexiconError, Result};

pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

pub fn is_letter(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// Lower-cases `s`, borrowing it when there is nothing to change.
pub fn normalize(s: &str) -> Cow<'_, str> {
    if s.chars().any(char::is_uppercase) {
        Cow::Owned(s.to_lowercase())
    } else {
        Cow::Borrowed(s)
    }
}

pub fn validate_word(word: &str) -> Result<()> {
    match word.chars().enumerate().find(|(_, c)| !is_letter(*c)) {
        None => Ok(()),
        Some((position, character)) => Err(LexiconError::InvalidWord {
            word: word.to_string(),
            position,
            character,
        }),
    }
}
