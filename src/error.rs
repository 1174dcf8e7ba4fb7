use std::path::PathBuf;

use thiserror::Error;

use crate::lexicon::wordlist::LoadReport;

pub type Result<T> = std::result::Result<T, LexiconError>;

/// Failures at the validation and I/O boundary. The trie itself never fails:
/// missing words and duplicate insertions are reported as `false`.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("could not read word list {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading stopped partway; `report` counts what was loaded before the failure.
    #[error("word list {path:?} stopped after {} tokens", .report.read)]
    Read {
        path: Option<PathBuf>,
        report: LoadReport,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid word {word:?}: {character:?} at position {position} is not a lowercase letter")]
    InvalidWord {
        word: String,
        position: usize,
        character: char,
    },

    #[error("invalid pattern {pattern:?}: {character:?} at position {position} is not a letter or one of '*', '?', '_'")]
    InvalidPattern {
        pattern: String,
        position: usize,
        character: char,
    },

    #[error("empty pattern")]
    EmptyPattern,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offending_character() {
        let err = LexiconError::InvalidWord { word: "ca7".into(), position: 2, character: '7' };
        assert_eq!(err.to_string(),
                   "invalid word \"ca7\": '7' at position 2 is not a lowercase letter");

        let err = LexiconError::InvalidPattern { pattern: "c.t".into(), position: 1, character: '.' };
        assert!(err.to_string().contains("'.' at position 1"));
    }
}
