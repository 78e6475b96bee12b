//! # Wordcraft Oracle
//!
//! Everything one round of the word puzzle touches, short of the loop itself.
//!
//! ## Core Concepts
//! - **Guess / WordLength / LetterVerdict**: validated puzzle vocabulary
//! - **FeedbackLedger**: append-only history of scored rounds for one game
//! - **Prompt composer**: turns the ledger into an instruction for the model
//! - **Provider**: trait-based generative oracle (Ollama `/api/generate`)
//! - **WordGenerator**: prompt -> model -> one new word, with a retry ceiling
//! - **ScoringClient**: the puzzle service's `/daily` endpoint
//! - **OllamaServer**: explicit handle on the local model server process

pub mod error;
pub mod word;
pub mod ledger;
pub mod prompt;
pub mod provider;
pub mod generator;
pub mod scoring;
pub mod server;

#[cfg(test)]
mod test_support;

pub use error::{Error, ErrorKind, ErrorStatus, Result};
pub use word::{extract_word, Guess, LetterVerdict, Verdict, WordLength};
pub use ledger::{FeedbackLedger, Round};
pub use prompt::compose_prompt;
pub use provider::{
    GenerateRequest, GenerateResponse, LlmProvider, OllamaProvider, ProviderConfig,
    ProviderError, SamplingParams,
};
pub use generator::{WordGenerator, DEFAULT_MAX_ATTEMPTS};
pub use scoring::{ScoringClient, ScoringOracle, DEFAULT_SCORING_URL};
pub use server::{OllamaServer, ServerState};
