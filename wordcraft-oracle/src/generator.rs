//! # Word generator
//!
//! Asks the generative oracle for the next candidate. The model's answer is
//! free text, so every call is a best-effort parse: the first standalone word
//! of the right length wins, and a missing or already-tried word means asking
//! again with the same prompt, up to `max_attempts` times.

use crate::error::{self, Error, Result};
use crate::ledger::FeedbackLedger;
use crate::prompt::compose_prompt;
use crate::provider::LlmProvider;
use crate::word::{extract_word, Guess, WordLength};

/// Attempts per `generate` call before giving up with `NoValidCandidate`
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

pub struct WordGenerator<P> {
    provider: P,
    max_attempts: usize,
}

impl<P: LlmProvider> WordGenerator<P> {
    /// At least one attempt is always made
    pub fn new(provider: P, max_attempts: usize) -> Self {
        Self {
            provider,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Produce a word of exactly `length` letters that is not in `ledger`.
    ///
    /// Transport failures return `OracleUnavailable` straight away; unusable
    /// answers are retried until the ceiling, then `NoValidCandidate`.
    pub async fn generate(&self, length: WordLength, ledger: &FeedbackLedger) -> Result<Guess> {
        let prompt = compose_prompt(length, ledger);

        for attempt in 1..=self.max_attempts {
            let text = self.provider.prompt(&prompt).await.map_err(|e| {
                error::oracle_unavailable(e)
                    .with_operation("generator::generate")
                    .with_context("provider", self.provider.name())
                    .with_context("attempt", attempt.to_string())
            })?;

            match extract_word(&text, length) {
                Ok(guess) if !ledger.contains(guess.as_str()) => {
                    tracing::debug!(attempt, word = %guess, "candidate accepted");
                    return Ok(guess);
                }
                Ok(guess) => {
                    tracing::info!(attempt, word = %guess, "candidate already tried, retrying");
                }
                Err(e) => {
                    tracing::info!(attempt, error = %e, "no usable candidate, retrying");
                }
            }
        }

        Err(Error::no_valid_candidate(self.max_attempts)
            .with_operation("generator::generate")
            .with_context("length", length.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Round;
    use crate::provider::{GenerateRequest, GenerateResponse, ProviderError};
    use crate::word::{LetterVerdict, Verdict};
    use crate::ErrorKind;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays canned answers and remembers the prompts it was sent
    struct ScriptedProvider {
        replies: Mutex<VecDeque<std::result::Result<String, ProviderError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedProvider {
        fn new(replies: Vec<std::result::Result<String, ProviderError>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn words(words: &[&str]) -> Self {
            Self::new(words.iter().map(|w| Ok(w.to_string())).collect())
        }

        fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    impl LlmProvider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        fn default_model(&self) -> &str {
            "scripted"
        }

        async fn generate(
            &self,
            request: GenerateRequest,
        ) -> std::result::Result<GenerateResponse, ProviderError> {
            self.prompts.lock().unwrap().push(request.prompt);
            let reply = self.replies.lock().unwrap().pop_front()
                .unwrap_or_else(|| Err(ProviderError::Other("script exhausted".into())))?;
            Ok(GenerateResponse { model: "scripted".into(), text: reply })
        }
    }

    fn five() -> WordLength {
        WordLength::new(5).unwrap()
    }

    fn ledger_with(words: &[&str]) -> FeedbackLedger {
        let mut ledger = FeedbackLedger::new();
        for word in words {
            let guess = Guess::new(*word, five()).unwrap();
            let verdicts = LetterVerdict::for_guess(&guess, &[Verdict::Absent; 5]);
            ledger.append(Round::new(guess, verdicts)).unwrap();
        }
        ledger
    }

    #[test]
    fn test_first_valid_word_is_returned() {
        let provider = ScriptedProvider::words(&["Crane"]);
        let generator = WordGenerator::new(provider, DEFAULT_MAX_ATTEMPTS);
        let guess = tokio_test::block_on(generator.generate(five(), &FeedbackLedger::new())).unwrap();

        assert_eq!(guess, "crane");
        assert_eq!(generator.provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_tried_words_are_skipped() {
        let provider = ScriptedProvider::words(&["crane", "train", "plant"]);
        let generator = WordGenerator::new(provider, DEFAULT_MAX_ATTEMPTS);
        let ledger = ledger_with(&["crane", "train"]);

        let guess = generator.generate(five(), &ledger).await.unwrap();
        assert_eq!(guess, "plant");
        assert_eq!(generator.provider.calls(), 3);
    }

    #[tokio::test]
    async fn test_wrong_length_answers_are_retried() {
        let provider = ScriptedProvider::words(&["It was obviously hard", "planets", "Okay: stone."]);
        let generator = WordGenerator::new(provider, DEFAULT_MAX_ATTEMPTS);

        let guess = generator.generate(five(), &FeedbackLedger::new()).await.unwrap();
        assert_eq!(guess, "stone");
        assert_eq!(guess.as_str().len(), 5);
    }

    #[tokio::test]
    async fn test_same_prompt_on_every_attempt() {
        let provider = ScriptedProvider::words(&["crane", "slate"]);
        let generator = WordGenerator::new(provider, DEFAULT_MAX_ATTEMPTS);
        let ledger = ledger_with(&["crane"]);
        generator.generate(five(), &ledger).await.unwrap();

        let prompts = generator.provider.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[0], prompts[1]);
        assert!(prompts[0].contains("crane"));
    }

    #[tokio::test]
    async fn test_ceiling_yields_no_valid_candidate() {
        let generator = WordGenerator::new(ScriptedProvider::words(&["crane", "crane", "crane"]), 3);
        let ledger = ledger_with(&["crane"]);

        let err = generator.generate(five(), &ledger).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoValidCandidate);
        assert!(err.is_retryable());
        assert_eq!(generator.provider.calls(), 3);
    }

    #[tokio::test]
    async fn test_transport_failure_is_not_retried() {
        let provider = ScriptedProvider::new(vec![
            Err(ProviderError::Network("connection refused".into())),
            Ok("crane".into()),
        ]);
        let generator = WordGenerator::new(provider, DEFAULT_MAX_ATTEMPTS);

        let err = generator.generate(five(), &FeedbackLedger::new()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OracleUnavailable);
        assert!(err.source_ref().is_some());
        assert_eq!(generator.provider.calls(), 1);
    }

    #[test]
    fn test_zero_attempts_is_clamped() {
        let generator = WordGenerator::new(ScriptedProvider::words(&[]), 0);
        assert_eq!(generator.max_attempts, 1);
    }
}
