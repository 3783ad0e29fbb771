//! Player records for the two mastermind roles.

use super::code::Code;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The two roles in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Role {
    /// Defines the secret code.
    #[display("Code Maker")]
    Setter,
    /// Tries to reproduce the secret code.
    #[display("Code Breaker")]
    Guesser,
}

/// Anything that plays a role and may hold a code.
pub trait Player {
    /// Role this player fills.
    fn role(&self) -> Role;

    /// The code held by this player, if one has been set.
    fn code(&self) -> Option<&Code>;

    /// Display name, derived from the role.
    fn name(&self) -> String {
        self.role().to_string()
    }
}

/// Holds the secret code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeSetter {
    secret: Option<Code>,
}

impl CodeSetter {
    /// Creates a setter with no secret yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the secret code.
    #[instrument(skip(self))]
    pub fn set_secret(&mut self, code: Code) {
        self.secret = Some(code);
    }

    /// Returns the secret code, if set.
    pub fn secret(&self) -> Option<&Code> {
        self.secret.as_ref()
    }
}

impl Player for CodeSetter {
    fn role(&self) -> Role {
        Role::Setter
    }

    fn code(&self) -> Option<&Code> {
        self.secret()
    }
}

/// Holds the guess for the current round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeGuesser {
    guess: Option<Code>,
}

impl CodeGuesser {
    /// Creates a guesser with no guess yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current guess.
    #[instrument(skip(self))]
    pub fn set_guess(&mut self, code: Code) {
        self.guess = Some(code);
    }

    /// Returns the current guess, if any.
    pub fn guess(&self) -> Option<&Code> {
        self.guess.as_ref()
    }
}

impl Player for CodeGuesser {
    fn role(&self) -> Role {
        Role::Guesser
    }

    fn code(&self) -> Option<&Code> {
        self.guess()
    }
}
