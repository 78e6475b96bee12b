//! Error kinds for wordcraft operations

use std::fmt;

/// The kind of error that occurred.
///
/// Callers match on ErrorKind to decide how to handle specific error cases:
/// the game loop retries the oracle kinds, the CLI re-prompts on
/// `InvalidInput`, and everything else bubbles up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// Invalid configuration or parameters
    ConfigInvalid,

    /// Operator or caller supplied a value outside its domain
    InvalidInput,

    // =========================================================================
    // Oracle errors
    // =========================================================================
    /// The generative oracle could not be reached or answered garbage
    OracleUnavailable,

    /// The scoring oracle could not be reached or answered garbage
    ScoringUnavailable,

    /// No usable candidate word after the generator's retry ceiling
    NoValidCandidate,

    // =========================================================================
    // Game errors
    // =========================================================================
    /// A guess was recorded twice in the same game
    DuplicateGuess,

    /// Too many consecutive failed oracle calls
    RetriesExhausted,

    /// The configured maximum number of rounds was reached without a win
    RoundLimitExceeded,

    // =========================================================================
    // Process / IO errors
    // =========================================================================
    /// Spawning or stopping a child process failed
    ProcessFailed,

    /// IO operation failed
    IoFailed,

    // =========================================================================
    // Parse errors
    // =========================================================================
    /// Failed to parse input
    ParseFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Unexpected => "Unexpected",
            ErrorKind::ConfigInvalid => "ConfigInvalid",
            ErrorKind::InvalidInput => "InvalidInput",

            ErrorKind::OracleUnavailable => "OracleUnavailable",
            ErrorKind::ScoringUnavailable => "ScoringUnavailable",
            ErrorKind::NoValidCandidate => "NoValidCandidate",

            ErrorKind::DuplicateGuess => "DuplicateGuess",
            ErrorKind::RetriesExhausted => "RetriesExhausted",
            ErrorKind::RoundLimitExceeded => "RoundLimitExceeded",

            ErrorKind::ProcessFailed => "ProcessFailed",
            ErrorKind::IoFailed => "IoFailed",

            ErrorKind::ParseFailed => "ParseFailed",
        }
    }

    /// Check if this error kind is retryable by default
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorKind::OracleUnavailable
                | ErrorKind::ScoringUnavailable
                | ErrorKind::NoValidCandidate
                | ErrorKind::ParseFailed
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
