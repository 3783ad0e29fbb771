//! Strictly Mastermind - Unified CLI
//!
//! Plays a console match, prints the rules, or scores a single guess.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use std::io;
use strictly_mastermind::{rules_text, Code, ConsoleConfig, ConsoleSession};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the game on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(config),
        Command::Rules => {
            println!("{}", rules_text());
            Ok(())
        }
        Command::Score {
            secret,
            guess,
            json,
        } => run_score(&secret, &guess, json),
    }
}

/// Loads the console config, falling back to defaults when no path is given.
#[instrument]
fn load_config(path: Option<&std::path::Path>) -> Result<ConsoleConfig> {
    match path {
        Some(path) => ConsoleConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(ConsoleConfig::default()),
    }
}

/// Runs an interactive match on stdin/stdout.
#[instrument(skip(config))]
fn run_play(config: ConsoleConfig) -> Result<()> {
    info!("Starting interactive match");
    let stdin = io::stdin();
    let mut session = ConsoleSession::new(config, stdin.lock(), io::stdout());
    session.run()?;
    info!(
        rounds = session.game().round(),
        winner = ?session.game().winner(),
        "Match finished"
    );
    Ok(())
}

/// Score report printed by `score --json`.
#[derive(Debug, Serialize)]
struct ScoreReport {
    secret: String,
    guess: String,
    feedback: String,
    exact: usize,
    partial: usize,
    solved: bool,
}

/// Scores one guess and prints the key pegs.
#[instrument]
fn run_score(secret: &str, guess: &str, json: bool) -> Result<()> {
    let secret_code = Code::parse(secret).context("Invalid secret")?;
    let guess_code = Code::parse(guess).context("Invalid guess")?;
    let feedback = guess_code.score_against(&secret_code);

    if json {
        let report = ScoreReport {
            secret: secret_code.to_string(),
            guess: guess_code.to_string(),
            feedback: feedback.to_string(),
            exact: feedback.exact_count(),
            partial: feedback.partial_count(),
            solved: feedback.is_solved(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", feedback);
    }
    Ok(())
}
