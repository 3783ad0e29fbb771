//! Command-line interface for strictly_mastermind.

use clap::{Parser, Subcommand};

/// Strictly Mastermind - two-player code breaking on the console
#[derive(Parser, Debug)]
#[command(name = "strictly_mastermind")]
#[command(about = "Two-player Mastermind on the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML console config (defaults are used when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive match on stdin/stdout
    Play,

    /// Print the rules
    Rules,

    /// Score a single guess against a secret
    Score {
        /// Secret code, e.g. YGBR
        secret: String,

        /// Guess to score, e.g. WGBB
        guess: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}
