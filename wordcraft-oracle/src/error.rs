//! Oracle error helpers
//!
//! Re-exports wordcraft-error and provides oracle-specific conveniences.

pub use wordcraft_error::{Error, ErrorKind, ErrorStatus, Result};

use crate::provider::ProviderError;

/// Create an InvalidInput error for a word length outside the puzzle bounds
pub fn invalid_word_length(value: usize, min: usize, max: usize) -> Error {
    Error::invalid_input(format!("word length must be between {} and {}, got {}", min, max, value))
        .with_context("length", value.to_string())
}

/// Create an InvalidInput error for a malformed guess
pub fn invalid_guess(word: impl Into<String>, length: usize) -> Error {
    let word = word.into();
    Error::invalid_input(format!(
        "'{}' is not {} lowercase letters",
        word, length
    ))
    .with_context("word", word)
}

/// Create a ParseFailed error when the model output holds no usable word
pub fn no_word_in_response(length: usize, response: &str) -> Error {
    Error::parse_failed(format!("no standalone {}-letter word in response", length))
        .with_context("response", truncate(response, 80))
}

/// Wrap a provider failure as OracleUnavailable, keeping the provider error as source
pub fn oracle_unavailable(err: ProviderError) -> Error {
    Error::oracle_unavailable(err.to_string()).set_source(err)
}

/// Create a ScoringUnavailable error for a verdict list that does not cover the guess
pub fn verdict_mismatch(guess: &str, expected: usize, got: usize) -> Error {
    Error::scoring_unavailable(format!(
        "expected {} verdicts, got {}",
        expected, got
    ))
    .with_context("guess", guess)
}

/// A verdict that does not line up with the guess letter at `position`
pub fn verdict_misaligned(guess: &str, position: usize, letter: char) -> Error {
    Error::scoring_unavailable(format!(
        "verdict for '{}' does not line up with position {} of the guess",
        letter, position
    ))
    .with_context("guess", guess)
    .with_context("position", position.to_string())
}

pub(crate) fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars).collect();
        format!("{}…", head)
    }
}
