//! Mastermind: a code setter hides four colored pegs, a code guesser
//! has ten rounds to find them.

mod code;
mod game;
mod invariants;
mod pegs;
mod player;
mod scoring;

pub use code::{Code, CodeError, CODE_LENGTH};
pub use game::{Game, GameError, GameState, GameStatus, Turn, MAX_ROUNDS};
pub use invariants::{
    FinishedHasWinner, GameInvariants, Invariant, InvariantSet, InvariantViolation, RoundBounded,
    WinnerImpliesFinished,
};
pub use pegs::{CodePeg, FeedbackPeg, COLOR_CHOICES};
pub use player::{CodeGuesser, CodeSetter, Player, Role};
pub use scoring::{score, Feedback, ScoreError};
