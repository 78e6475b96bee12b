//! # Puzzle vocabulary
//!
//! Validated newtypes for the values that flow through a round: the word
//! length chosen for the game, a candidate guess, and the per-letter verdicts
//! the scoring oracle hands back.

use crate::error::{self, Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// WordLength
// ============================================================================

/// Number of letters in the hidden word, fixed for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WordLength(usize);

impl WordLength {
    pub const MIN: usize = 5;
    pub const MAX: usize = 22;

    pub fn new(value: usize) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(error::invalid_word_length(value, Self::MIN, Self::MAX))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Every valid length, smallest first
    pub fn all() -> impl Iterator<Item = WordLength> {
        (Self::MIN..=Self::MAX).map(WordLength)
    }
}

impl TryFrom<usize> for WordLength {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for WordLength {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let value: usize = s.parse().map_err(|_| {
            Error::invalid_input(format!("'{}' is not a number", s)).with_context("input", s)
        })?;
        Self::new(value)
    }
}

impl fmt::Display for WordLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Guess
// ============================================================================

/// A candidate word: exactly `WordLength` lowercase ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Guess(String);

impl Guess {
    pub fn new(word: impl Into<String>, length: WordLength) -> Result<Self> {
        let word = word.into();
        let valid = word.len() == length.get() && word.bytes().all(|b| b.is_ascii_lowercase());
        if valid {
            Ok(Self(word))
        } else {
            Err(error::invalid_guess(word, length.get()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Guess {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Guess {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Guess {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Verdicts
// ============================================================================

/// Judgment of one letter against the hidden word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Right letter, right position
    Correct,
    /// Right letter, wrong position
    Present,
    /// Letter not in the word
    Absent,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Correct => "correct",
            Verdict::Present => "present",
            Verdict::Absent => "absent",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry of the scoring oracle's answer.
///
/// The puzzle service names these fields `guess` and `slot`; both spellings
/// are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterVerdict {
    #[serde(alias = "guess")]
    pub letter: char,
    #[serde(alias = "slot")]
    pub position: usize,
    pub result: Verdict,
}

impl LetterVerdict {
    pub fn new(letter: char, position: usize, result: Verdict) -> Self {
        Self { letter, position, result }
    }

    /// Build a full verdict row for `guess` from one verdict per letter
    pub fn for_guess(guess: &Guess, results: &[Verdict]) -> Vec<LetterVerdict> {
        guess
            .as_str()
            .chars()
            .zip(results)
            .enumerate()
            .map(|(position, (letter, result))| LetterVerdict::new(letter, position, *result))
            .collect()
    }

    pub fn is_correct(&self) -> bool {
        self.result == Verdict::Correct
    }
}

// ============================================================================
// Extraction
// ============================================================================

/// Pull the first standalone run of exactly `length` letters out of free text.
///
/// The text is trimmed and lowercased first; anything around the word is
/// ignored. No such run yields `ParseFailed`.
pub fn extract_word(text: &str, length: WordLength) -> Result<Guess> {
    let pattern = format!(r"\b[a-z]{{{}}}\b", length.get());
    let re = Regex::new(&pattern).map_err(|e| {
        Error::unexpected(format!("bad word pattern: {}", e)).set_source(e)
    })?;

    let text = text.trim().to_lowercase();
    match re.find(&text) {
        Some(m) => Guess::new(m.as_str(), length),
        None => Err(error::no_word_in_response(length.get(), &text)),
    }
}
