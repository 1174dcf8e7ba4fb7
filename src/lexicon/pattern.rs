use std::fmt::{Display, Formatter};
use std::str::FromStr;

use nom::branch::alt;
use nom::character::complete::{char, satisfy};
use nom::combinator::{map, value};
use nom::multi::many1;
use nom::IResult;

use crate::alphabet::{is_letter, normalize};
use crate::error::{LexiconError, Result};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Symbol {
    /// Matches exactly this letter.
    Letter(char),
    /// `?` or `_`: exactly one letter.
    AnyOne,
    /// `*`: zero or more letters.
    AnyRun,
}

impl Symbol {
    fn from_char(c: char) -> Symbol {
        match c {
            '*' => Symbol::AnyRun,
            '?' | '_' => Symbol::AnyOne,
            c => Symbol::Letter(c),
        }
    }
}

/// A wildcard pattern. Runs of `*` are stored as a single `AnyRun`, which
/// matches the same words.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Pattern {
    pub(crate) symbols: Vec<Symbol>,
}

impl Pattern {
    /// Validating constructor; see also `str::parse`.
    pub fn parse(pattern: &str) -> Result<Pattern> {
        pattern.parse()
    }

    /// Reads every character as a symbol without checking the alphabet.
    pub fn unchecked(pattern: &str) -> Pattern {
        let mut symbols: Vec<Symbol> = Vec::with_capacity(pattern.len());
        for symbol in pattern.chars().map(Symbol::from_char) {
            if symbol == Symbol::AnyRun && symbols.last() == Some(&Symbol::AnyRun) {
                continue;
            }
            symbols.push(symbol);
        }
        Pattern { symbols }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// True when the pattern has no wildcards, so it can match at most one word.
    pub fn is_literal(&self) -> bool {
        self.symbols.iter().all(|x| matches!(x, Symbol::Letter(_)))
    }

    /// Smallest word length this pattern can match.
    pub fn min_len(&self) -> usize {
        self.symbols.iter().filter(|x| **x != Symbol::AnyRun).count()
    }
}

impl FromStr for Pattern {
    type Err = LexiconError;

    fn from_str(s: &str) -> Result<Pattern> {
        let s = normalize(s);
        if s.is_empty() {
            return Err(LexiconError::EmptyPattern);
        }
        match symbols(&s) {
            Ok(("", symbols)) => Ok(Pattern { symbols }),
            Ok((rest, _)) => Err(invalid(&s, rest)),
            Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(invalid(&s, e.input)),
            Err(nom::Err::Incomplete(_)) => Err(invalid(&s, "")),
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.symbols.iter().try_for_each(|x| match x {
            Symbol::Letter(c) => write!(f, "{}", c),
            Symbol::AnyOne => write!(f, "?"),
            Symbol::AnyRun => write!(f, "*"),
        })
    }
}

fn invalid(pattern: &str, rest: &str) -> LexiconError {
    let offset = pattern.len() - rest.len();
    LexiconError::InvalidPattern {
        pattern: pattern.to_string(),
        position: pattern[..offset].chars().count(),
        character: rest.chars().next().unwrap_or_default(),
    }
}

fn letter(input: &str) -> IResult<&str, Symbol> {
    map(satisfy(is_letter), Symbol::Letter)(input)
}

fn any_one(input: &str) -> IResult<&str, Symbol> {
    value(Symbol::AnyOne, alt((char('?'), char('_'))))(input)
}

fn any_run(input: &str) -> IResult<&str, Symbol> {
    value(Symbol::AnyRun, many1(char('*')))(input)
}

fn symbols(input: &str) -> IResult<&str, Vec<Symbol>> {
    many1(alt((letter, any_one, any_run)))(input)
}
