use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};
use typed_builder::TypedBuilder;

use crate::alphabet::{normalize, validate_word};
use crate::error::{LexiconError, Result};
use crate::lexicon::trie::Lexicon;

/// How words are laid out in a word list. By default every whitespace-separated
/// token is a word, which covers the usual one-word-per-line file.
#[derive(TypedBuilder, Debug, Clone, Default)]
pub struct FileFormat {
    /// Split each line on this character and take `word_column`.
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
    /// Lines starting with this character are skipped.
    #[builder(default, setter(strip_option))]
    comment_prefix: Option<char>,
}

impl FileFormat {
    fn tokens<'a>(&self, line: &'a str) -> Vec<&'a str> {
        let line = line.trim();
        if line.is_empty() || self.comment_prefix.map_or(false, |p| line.starts_with(p)) {
            return vec![];
        }
        match self.delimiter {
            None => line.split_whitespace().collect(),
            Some(d) => line.split(d)
                .nth(self.word_column.unwrap_or(0))
                .map(str::trim)
                .filter(|x| !x.is_empty())
                .into_iter()
                .collect(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Tokens seen.
    pub read: usize,
    /// Tokens that were new words.
    pub added: usize,
    /// Tokens that were not words and were skipped.
    pub rejected: usize,
}

impl Lexicon {
    pub fn from_file<P: AsRef<Path>>(path: P, format: &FileFormat) -> Result<Lexicon> {
        let mut lexicon = Lexicon::new();
        lexicon.load_file(path, format)?;
        Ok(lexicon)
    }

    pub fn load_file<P: AsRef<Path>>(&mut self, path: P, format: &FileFormat) -> Result<LoadReport> {
        let path = path.as_ref();
        debug!(path = ?path, "reading word list");
        let file = File::open(path)
            .map_err(|source| LexiconError::Io { path: path.to_path_buf(), source })?;
        match self.load_reader(BufReader::new(file), format) {
            Err(LexiconError::Read { report, source, .. }) =>
                Err(LexiconError::Read { path: Some(path.to_path_buf()), report, source }),
            other => other,
        }
    }

    /// Loads every line of `reader`. Words are inserted as they are read, so on
    /// a read error the lexicon keeps the words before it and the error carries
    /// the report up to that point.
    pub fn load_reader<R: BufRead>(&mut self, reader: R, format: &FileFormat) -> Result<LoadReport> {
        let start = Instant::now();
        let mut report = LoadReport::default();

        for (number, line) in reader.lines().enumerate() {
            match line {
                Ok(line) => self.load_line(&line, number + 1, format, &mut report),
                Err(source) => {
                    warn!(line = number + 1, read = report.read, "word list read failed");
                    return Err(LexiconError::Read { path: None, report, source });
                }
            }
        }

        info!(read = report.read, added = report.added, rejected = report.rejected,
              elapsed_ms = start.elapsed().as_millis() as u64, "loaded word list");
        Ok(report)
    }

    pub fn load_str(&mut self, contents: &str, format: &FileFormat) -> LoadReport {
        let mut report = LoadReport::default();
        contents.lines().enumerate()
            .for_each(|(number, line)| self.load_line(line, number + 1, format, &mut report));
        report
    }

    fn load_line(&mut self, line: &str, number: usize, format: &FileFormat, report: &mut LoadReport) {
        for token in format.tokens(line) {
            report.read += 1;
            let word = normalize(token);
            match validate_word(&word) {
                Ok(()) => {
                    if self.insert(&word) {
                        report.added += 1;
                    }
                }
                Err(e) => {
                    warn!(line = number, error = %e, "skipping token");
                    report.rejected += 1;
                }
            }
        }
    }
}
