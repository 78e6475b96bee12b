//! # Scoring oracle
//!
//! The puzzle service that judges a guess against the hidden word:
//! `GET {base}/daily?guess=<word>&size=<length>` answers with one
//! `{letter, position, result}` object per letter.

use crate::error::{self, Error, Result};
use crate::word::{Guess, LetterVerdict, WordLength};
use reqwest::Client;

/// Public puzzle service used when `API_URL` is not set
pub const DEFAULT_SCORING_URL: &str = "https://wordle.votee.dev:8000";

/// Anything that can score a guess
#[allow(async_fn_in_trait)]
pub trait ScoringOracle: Send + Sync {
    /// Verdicts for every letter of `guess`, in position order.
    ///
    /// Fails with `ScoringUnavailable`; never retries internally.
    async fn score(&self, guess: &Guess, length: WordLength) -> Result<Vec<LetterVerdict>>;
}

/// HTTP client for the `/daily` endpoint
pub struct ScoringClient {
    client: Client,
    base_url: String,
}

impl ScoringClient {
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, Self::DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| {
                Error::config_invalid("failed to create HTTP client")
                    .with_operation("scoring::new")
                    .set_source(e)
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl ScoringOracle for ScoringClient {
    async fn score(&self, guess: &Guess, length: WordLength) -> Result<Vec<LetterVerdict>> {
        let unavailable = |message: String| {
            Error::scoring_unavailable(message)
                .with_operation("scoring::score")
                .with_context("guess", guess.as_str())
        };

        let size = length.get().to_string();
        let response = self.client
            .get(format!("{}/daily", self.base_url()))
            .query(&[("guess", guess.as_str()), ("size", size.as_str())])
            .send()
            .await
            .map_err(|e| unavailable(format!("request failed: {}", e)).set_source(e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(unavailable(format!("API error ({}): {}", status.as_u16(), text))
                .with_context("status", status.as_u16().to_string()));
        }

        let mut verdicts: Vec<LetterVerdict> = response.json().await
            .map_err(|e| unavailable(format!("bad response body: {}", e)).set_source(e))?;

        if verdicts.len() != length.get() {
            return Err(error::verdict_mismatch(guess.as_str(), length.get(), verdicts.len())
                .with_operation("scoring::score"));
        }

        verdicts.sort_by_key(|v| v.position);
        let results: Vec<_> = verdicts.iter().map(|v| v.result).collect();
        let expected = LetterVerdict::for_guess(guess, &results);
        let misaligned = verdicts.iter().zip(&expected).position(|(got, want)| {
            got.position != want.position || got.letter.to_ascii_lowercase() != want.letter
        });
        if let Some(i) = misaligned {
            return Err(error::verdict_misaligned(guess.as_str(), i, verdicts[i].letter)
                .with_operation("scoring::score"));
        }

        tracing::debug!(guess = %guess, "scored");
        Ok(verdicts)
    }
}
