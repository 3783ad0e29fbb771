//! Round state machine for mastermind.
//!
//! [`GameState`] owns every transition: advancing the round counter and
//! declaring the winner. [`Game`] composes it with the scoring engine and
//! the two player records.

use super::code::Code;
#[cfg(debug_assertions)]
use super::invariants::{GameInvariants, InvariantSet};
use super::player::{CodeGuesser, CodeSetter, Player, Role};
use super::scoring::{score, Feedback, ScoreError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Number of rounds the guesser gets.
pub const MAX_ROUNDS: u8 = 10;

/// Coarse phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// No round has been played yet.
    #[display("Not started")]
    NotStarted,
    /// Rounds remain and nobody has won.
    #[display("Active")]
    Active,
    /// Terminal: the code was broken or the rounds ran out.
    #[display("Finished")]
    Finished,
}

/// Round counter, activity flag and winner of one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    round: u8,
    active: bool,
    winner: Option<Role>,
}

impl GameState {
    /// Creates the state of a fresh match.
    pub fn new() -> Self {
        Self {
            round: 0,
            active: true,
            winner: None,
        }
    }

    /// Rounds played so far.
    pub fn round(&self) -> u8 {
        self.round
    }

    /// True until the match finishes.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The winner, once decided.
    pub fn winner(&self) -> Option<Role> {
        self.winner
    }

    /// Returns the current phase.
    pub fn status(&self) -> GameStatus {
        match (self.active, self.round) {
            (false, _) => GameStatus::Finished,
            (true, 0) => GameStatus::NotStarted,
            (true, _) => GameStatus::Active,
        }
    }

    /// Moves to the next round.
    ///
    /// Reaching [`MAX_ROUNDS`] finishes the match without naming a winner;
    /// that is decided after the round is scored.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Finished`] if the match is already over.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn advance_round(&mut self) -> Result<(), GameError> {
        if !self.active {
            warn!("Attempted to advance a finished game");
            return Err(GameError::Finished);
        }

        self.round += 1;
        if self.round == MAX_ROUNDS {
            info!(round = self.round, "Round limit reached");
            self.active = false;
        }
        Ok(())
    }

    /// Ends the match in favor of `role`. A winner is only ever set once.
    fn declare_winner(&mut self, role: Role) {
        if self.winner.is_some() {
            return;
        }
        info!(winner = %role, round = self.round, "Game finished");
        self.active = false;
        self.winner = Some(role);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// One scored round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Round number, starting at 1.
    pub round: u8,
    /// The guess that was scored.
    pub guess: Code,
    /// Feedback for the guess.
    pub feedback: Feedback,
}

/// A match between a code setter and a code guesser.
#[derive(Debug, Clone, Default)]
pub struct Game {
    setter: CodeSetter,
    guesser: CodeGuesser,
    state: GameState,
    history: Vec<Turn>,
}

impl Game {
    /// Creates a new match with no codes set.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the secret code.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SecretLocked`] once the first round was played.
    #[instrument(skip(self, code))]
    pub fn set_secret(&mut self, code: Code) -> Result<(), GameError> {
        if self.state.round() > 0 {
            return Err(GameError::SecretLocked);
        }
        self.setter.set_secret(code);
        Ok(())
    }

    /// Stores the guess for the next round.
    #[instrument(skip(self), fields(guess = %code))]
    pub fn set_guess(&mut self, code: Code) {
        self.guesser.set_guess(code);
    }

    /// Plays one round: advances the counter, scores the current guess
    /// against the secret and decides the winner.
    ///
    /// Returns the rendered feedback, e.g. `RW--`.
    ///
    /// # Errors
    ///
    /// - [`GameError::CodeNotSet`] if either code is missing (state untouched)
    /// - [`GameError::Finished`] if the match is already over
    #[instrument(skip(self), fields(round = self.state.round()))]
    pub fn play(&mut self) -> Result<String, GameError> {
        let secret = *self
            .setter
            .code()
            .ok_or(GameError::CodeNotSet(Role::Setter))?;
        let guess = *self
            .guesser
            .code()
            .ok_or(GameError::CodeNotSet(Role::Guesser))?;

        self.state.advance_round()?;

        let feedback = score(guess.pegs(), secret.pegs())?;
        if feedback.is_solved() {
            self.state.declare_winner(Role::Guesser);
        } else if !self.state.is_active() {
            self.state.declare_winner(Role::Setter);
        }

        #[cfg(debug_assertions)]
        GameInvariants::check_all(&self.state).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GameError::InvariantViolation(descriptions)
        })?;

        let rendered = feedback.to_string();
        debug!(%guess, feedback = %rendered, "Round scored");
        self.history.push(Turn {
            round: self.state.round(),
            guess,
            feedback,
        });
        Ok(rendered)
    }

    /// Returns the state machine.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Rounds played so far.
    pub fn round(&self) -> u8 {
        self.state.round()
    }

    /// True until the match finishes.
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Returns the current phase.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// The winner, once decided.
    pub fn winner(&self) -> Option<Role> {
        self.state.winner()
    }

    /// Display name of the winner, once decided.
    pub fn winner_name(&self) -> Option<String> {
        self.winner().map(|role| match role {
            Role::Setter => self.setter.name(),
            Role::Guesser => self.guesser.name(),
        })
    }

    /// The code setter.
    pub fn setter(&self) -> &CodeSetter {
        &self.setter
    }

    /// The code guesser.
    pub fn guesser(&self) -> &CodeGuesser {
        &self.guesser
    }

    /// Every scored round, oldest first.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }
}

/// Error that can occur while playing a match.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum GameError {
    /// The match is over; no more rounds can be played.
    #[display("Game has finished")]
    Finished,

    /// A player has not provided a code yet.
    #[display("{} has not set a code yet", _0)]
    CodeNotSet(Role),

    /// The secret cannot change once play has started.
    #[display("Secret code cannot change after the first round")]
    SecretLocked,

    /// The guess could not be scored.
    #[display("{}", _0)]
    #[from]
    Score(ScoreError),

    /// A state invariant failed after a play.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}
