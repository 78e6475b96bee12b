//! # Wordcraft Agent
//!
//! The game controller runs the model <-> puzzle loop:
//! 1. Ask the generative oracle for a word nobody has tried
//! 2. Submit it to the scoring oracle
//! 3. Record the verdicts in the ledger; the next prompt carries them
//! 4. Repeat until every letter is correct
//!
//! Failed oracle calls never end the game on their own; they are logged and
//! the round is attempted again.

mod game;

pub use game::{scoring_url, scoring_url_from_env, Game, GameConfig, GameOutcome, GameState};
