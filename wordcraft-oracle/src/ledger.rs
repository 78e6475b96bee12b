//! # Feedback Ledger
//!
//! Append-only history of scored rounds for one game. Rounds are kept in the
//! order they were played; a guess can be recorded at most once.

use crate::error::{Error, Result};
use crate::word::{Guess, LetterVerdict};
use serde::Serialize;

/// One guess and the verdict for every one of its letters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Round {
    pub guess: Guess,
    pub verdicts: Vec<LetterVerdict>,
}

impl Round {
    pub fn new(guess: Guess, verdicts: Vec<LetterVerdict>) -> Self {
        Self { guess, verdicts }
    }

    /// True when every letter landed in the right spot
    pub fn is_exact_match(&self) -> bool {
        !self.verdicts.is_empty() && self.verdicts.iter().all(LetterVerdict::is_correct)
    }
}

/// Ordered history of rounds for the current game
#[derive(Debug, Clone, Default, Serialize)]
pub struct FeedbackLedger {
    rounds: Vec<Round>,
}

impl FeedbackLedger {
    pub fn new() -> Self {
        Self { rounds: Vec::new() }
    }

    /// Record a round. Fails with `DuplicateGuess` if its guess was already played.
    pub fn append(&mut self, round: Round) -> Result<()> {
        if self.contains(round.guess.as_str()) {
            return Err(Error::duplicate_guess(round.guess.as_str())
                .with_operation("ledger::append"));
        }
        self.rounds.push(round);
        Ok(())
    }

    pub fn history(&self) -> &[Round] {
        &self.rounds
    }

    /// True iff the most recent round is an exact match
    pub fn is_won(&self) -> bool {
        self.rounds.last().is_some_and(Round::is_exact_match)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.rounds.iter().any(|r| r.guess == word)
    }

    pub fn guesses(&self) -> impl Iterator<Item = &Guess> {
        self.rounds.iter().map(|r| &r.guess)
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}
