//! Validated four-peg codes.

use super::pegs::{CodePeg, COLOR_CHOICES};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Number of pegs in every code.
pub const CODE_LENGTH: usize = 4;

/// An ordered sequence of exactly four code pegs.
///
/// Built only from a full array or through [`Code::parse`], so a partial
/// code is never observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Code {
    pegs: [CodePeg; CODE_LENGTH],
}

impl Code {
    /// Creates a code from four pegs.
    pub const fn new(pegs: [CodePeg; CODE_LENGTH]) -> Self {
        Self { pegs }
    }

    /// Parses raw text into a code.
    ///
    /// Checks run in a fixed order: empty input, then length, then each
    /// character left to right. Input is neither trimmed nor case-folded.
    ///
    /// # Errors
    ///
    /// Returns the first [`CodeError`] encountered in that order.
    #[instrument]
    pub fn parse(raw: &str) -> Result<Self, CodeError> {
        if raw.is_empty() {
            return Err(CodeError::Empty);
        }

        let len = raw.chars().count();
        if len != CODE_LENGTH {
            return Err(CodeError::InvalidLength(len));
        }

        let mut pegs = [CodePeg::Yellow; CODE_LENGTH];
        for (slot, c) in pegs.iter_mut().zip(raw.chars()) {
            *slot = CodePeg::from_code(c).ok_or(CodeError::InvalidColor(c))?;
        }

        debug!(?pegs, "Parsed code");
        Ok(Self { pegs })
    }

    /// Returns the pegs in order.
    pub fn pegs(&self) -> &[CodePeg; CODE_LENGTH] {
        &self.pegs
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for peg in &self.pegs {
            write!(f, "{}", peg.code())?;
        }
        Ok(())
    }
}

/// Error raised when raw text is not a valid code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum CodeError {
    /// The input was empty.
    #[display("String shouldn't be empty")]
    Empty,

    /// The input was not exactly four characters long.
    #[display("Length must be {} characters", CODE_LENGTH)]
    InvalidLength(usize),

    /// The input contained a character outside the color vocabulary.
    #[display("Code color is unacceptable, only ({})", COLOR_CHOICES)]
    InvalidColor(char),
}

impl std::error::Error for CodeError {}
