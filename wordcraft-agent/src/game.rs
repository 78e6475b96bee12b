//! Game controller - orchestrates the generate -> score -> record loop

use std::time::Duration;
use wordcraft_oracle::{
    Error, ErrorKind, FeedbackLedger, Guess, LetterVerdict, LlmProvider, OllamaServer, Result,
    Round, ScoringOracle, WordGenerator, WordLength, DEFAULT_SCORING_URL,
};

/// Configuration for a game
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Print every guess and its feedback to stdout
    pub verbose: bool,
    /// Pause after a failed oracle call before trying again
    pub retry_delay: Duration,
    /// Give up after this many failed oracle calls in a row (none = never)
    pub max_consecutive_failures: Option<usize>,
    /// Give up after this many scored rounds without a win (none = never)
    pub max_rounds: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            verbose: true,
            retry_delay: Duration::from_millis(500),
            max_consecutive_failures: None,
            max_rounds: None,
        }
    }
}

/// Scoring service address: `API_URL` if set, the public service otherwise
pub fn scoring_url_from_env() -> String {
    scoring_url(std::env::var("API_URL").ok())
}

pub fn scoring_url(configured: Option<String>) -> String {
    configured
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_SCORING_URL.to_string())
}

/// How a won game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    /// The hidden word
    pub guess: Guess,
    /// Scored rounds, the winning one included
    pub rounds: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameState {
    AwaitingGuess,
    AwaitingScore(Guess),
    Deciding(Guess, Vec<LetterVerdict>),
    Won(GameOutcome),
}

/// One game against the puzzle service
pub struct Game<P, S> {
    length: WordLength,
    generator: WordGenerator<P>,
    scorer: S,
    /// Local model server, started on the first guess and stopped after the win
    server: Option<OllamaServer>,
    config: GameConfig,
    ledger: FeedbackLedger,
    rounds: usize,
    consecutive_failures: usize,
    state: GameState,
}

impl<P: LlmProvider, S: ScoringOracle> Game<P, S> {
    pub fn new(length: WordLength, generator: WordGenerator<P>, scorer: S, config: GameConfig) -> Self {
        Self {
            length,
            generator,
            scorer,
            server: None,
            config,
            ledger: FeedbackLedger::new(),
            rounds: 0,
            consecutive_failures: 0,
            state: GameState::AwaitingGuess,
        }
    }

    /// Attach the local model server this game is responsible for
    pub fn with_server(mut self, server: OllamaServer) -> Self {
        self.server = Some(server);
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn ledger(&self) -> &FeedbackLedger {
        &self.ledger
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Play until the word is found, then stop the local server.
    pub async fn run(&mut self) -> Result<GameOutcome> {
        if self.config.verbose {
            println!("Solving a {}-letter word\n", self.length);
        }

        loop {
            self.step().await?;
            if let GameState::Won(outcome) = &self.state {
                let outcome = outcome.clone();
                self.stop_server().await;
                return Ok(outcome);
            }
        }
    }

    /// Perform exactly one state transition.
    ///
    /// Oracle failures are absorbed here (logged, paused, retried on the next
    /// step). Only the optional ceilings and ledger violations surface as errors.
    pub async fn step(&mut self) -> Result<&GameState> {
        let current = std::mem::replace(&mut self.state, GameState::AwaitingGuess);

        self.state = match current {
            GameState::AwaitingGuess => self.request_guess().await?,
            GameState::AwaitingScore(guess) => self.score_guess(guess).await?,
            GameState::Deciding(guess, verdicts) => self.decide(guess, verdicts)?,
            GameState::Won(outcome) => GameState::Won(outcome),
        };

        Ok(&self.state)
    }

    async fn request_guess(&mut self) -> Result<GameState> {
        if let Some(max) = self.config.max_rounds {
            if self.rounds >= max {
                return Err(Error::new(
                    ErrorKind::RoundLimitExceeded,
                    format!("no win after {} rounds", self.rounds),
                )
                .with_operation("game::step"));
            }
        }

        if let Some(server) = self.server.as_mut() {
            if let Err(e) = server.ensure_started().await {
                tracing::warn!(error = %e, "local model server did not start");
            }
        }

        match self.generator.generate(self.length, &self.ledger).await {
            Ok(guess) => {
                if self.config.verbose {
                    println!("Guess {}: {}", self.rounds + 1, guess);
                }
                Ok(GameState::AwaitingScore(guess))
            }
            Err(e) => {
                self.record_failure(e).await?;
                Ok(GameState::AwaitingGuess)
            }
        }
    }

    async fn score_guess(&mut self, guess: Guess) -> Result<GameState> {
        match self.scorer.score(&guess, self.length).await {
            Ok(verdicts) => {
                self.consecutive_failures = 0;
                if self.config.verbose {
                    println!("   Feedback: {}", render_feedback(&verdicts));
                }
                Ok(GameState::Deciding(guess, verdicts))
            }
            Err(e) => {
                tracing::info!(word = %guess, "discarding unscored guess");
                self.record_failure(e).await?;
                Ok(GameState::AwaitingGuess)
            }
        }
    }

    fn decide(&mut self, guess: Guess, verdicts: Vec<LetterVerdict>) -> Result<GameState> {
        self.ledger
            .append(Round::new(guess.clone(), verdicts))
            .map_err(|e| e.with_operation("game::decide"))?;
        self.rounds += 1;

        if !self.ledger.is_won() {
            return Ok(GameState::AwaitingGuess);
        }

        if self.config.verbose {
            println!("\nSolved in {} rounds", self.rounds);
        }
        tracing::info!(word = %guess, rounds = self.rounds, "game won");

        Ok(GameState::Won(GameOutcome {
            guess,
            rounds: self.rounds,
        }))
    }

    async fn record_failure(&mut self, err: Error) -> Result<()> {
        self.consecutive_failures += 1;
        tracing::warn!(
            error = %err,
            failures = self.consecutive_failures,
            "oracle call failed, retrying"
        );
        if self.config.verbose {
            println!("   Retrying after error: {}", err.message());
        }

        if let Some(max) = self.config.max_consecutive_failures {
            if self.consecutive_failures >= max {
                return Err(Error::new(
                    ErrorKind::RetriesExhausted,
                    format!("{} consecutive oracle failures", self.consecutive_failures),
                )
                .with_operation("game::step")
                .set_source(err.persist()));
            }
        }

        tokio::time::sleep(self.config.retry_delay).await;
        Ok(())
    }

    async fn stop_server(&mut self) {
        if let Some(server) = self.server.as_mut() {
            if let Err(e) = server.stop().await {
                tracing::warn!(error = %e, "failed to stop local model server");
            }
        }
    }
}

fn render_feedback(verdicts: &[LetterVerdict]) -> String {
    verdicts
        .iter()
        .map(|v| format!("{}={}", v.letter, v.result))
        .collect::<Vec<_>>()
        .join(" ")
}
