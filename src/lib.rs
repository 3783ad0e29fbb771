//! Strictly Mastermind library - type-safe Mastermind core
//!
//! A code setter hides four colored pegs; a code guesser has ten rounds to
//! reproduce them, receiving red/white key pegs after every guess.
//!
//! # Architecture
//!
//! - **Games**: peg vocabulary, code parser, scoring engine and the round
//!   state machine
//! - **Console**: line-oriented session driving one match over any reader
//!   and writer
//! - **Config**: presentation settings loaded from TOML
//!
//! # Example
//!
//! ```
//! use strictly_mastermind::{Code, Game, Role};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = Game::new();
//! game.set_secret(Code::parse("BYYW")?)?;
//!
//! game.set_guess(Code::parse("WYBB")?);
//! assert_eq!(game.play()?, "RWW-");
//!
//! game.set_guess(Code::parse("BYYW")?);
//! assert_eq!(game.play()?, "RRRR");
//! assert_eq!(game.winner(), Some(Role::Guesser));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, ConsoleConfig};

// Crate-level exports - Console session
pub use console::{rules_text, ConsoleError, ConsoleSession};

// Crate-level exports - Game types (mastermind)
pub use games::mastermind::{
    score, Code, CodeError, CodeGuesser, CodePeg, CodeSetter, Feedback, FeedbackPeg,
    FinishedHasWinner, Game, GameError, GameInvariants, GameState, GameStatus, Invariant,
    InvariantSet, InvariantViolation, Player, Role, RoundBounded, ScoreError, Turn,
    WinnerImpliesFinished, CODE_LENGTH, COLOR_CHOICES, MAX_ROUNDS,
};
