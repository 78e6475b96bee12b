//! # Wordcraft CLI
//!
//! Solves the daily word puzzle by letting a local model guess and the puzzle
//! service score.
//!
//! Usage:
//!   wordcraft
//!
//! Environment:
//!   API_URL    scoring service address (default https://wordle.votee.dev:8000)
//!   RUST_LOG   diagnostic log filter, written to stderr (default warn)

use clap::Parser;
use std::io::{BufRead, Write};
use tracing_subscriber::EnvFilter;
use wordcraft_agent::{scoring_url_from_env, Game, GameConfig};
use wordcraft_oracle::{
    Error, OllamaProvider, OllamaServer, Result, ScoringClient, WordGenerator, WordLength,
    DEFAULT_MAX_ATTEMPTS,
};

#[derive(Parser)]
#[command(name = "wordcraft")]
#[command(author, version, about = "Wordcraft - a language model plays the daily word puzzle")]
struct Cli {}

const LENGTH_PROMPT: &str = "Please select Guess Size(5-22): ";

/// Ask for the word length until a valid one is entered.
fn read_word_length<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<WordLength> {
    loop {
        write!(output, "{}", LENGTH_PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::invalid_input("no word length entered")
                .with_operation("cli::read_word_length"));
        }

        match line.parse::<WordLength>() {
            Ok(length) => return Ok(length),
            Err(e) => writeln!(output, "{}", e.message())?,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_with(err: Error) -> ! {
    eprintln!("Error: {}", err);
    if let Some(source) = err.source_ref() {
        eprintln!("Caused by: {:#}", source);
    }
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    let _cli = Cli::parse();
    init_tracing();

    let length = read_word_length(std::io::stdin().lock(), std::io::stdout())
        .unwrap_or_else(|e| exit_with(e));

    let provider = OllamaProvider::local().unwrap_or_else(|e| exit_with(e));
    let scorer = ScoringClient::new(scoring_url_from_env()).unwrap_or_else(|e| exit_with(e));

    println!();
    let generator = WordGenerator::new(provider, DEFAULT_MAX_ATTEMPTS);
    let mut game = Game::new(length, generator, scorer, GameConfig::default())
        .with_server(OllamaServer::new());

    match game.run().await {
        Ok(outcome) => {
            println!("\nYou won! The word is: {}", outcome.guess);
            println!("Total Guesses: {}", outcome.rounds);
        }
        Err(e) => exit_with(e),
    }
}
