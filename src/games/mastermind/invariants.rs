//! First-class invariants for the round state machine.
//!
//! Invariants are properties of [`GameState`] that must hold after every
//! completed play. `Game::play` checks them in debug builds.

use super::game::{GameState, MAX_ROUNDS};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// The round counter never passes the round limit.
pub struct RoundBounded;

impl Invariant<GameState> for RoundBounded {
    fn holds(state: &GameState) -> bool {
        let valid = state.round() <= MAX_ROUNDS;
        if !valid {
            warn!(round = state.round(), "Round counter exceeded limit");
        }
        valid
    }

    fn description() -> &'static str {
        "Round counter never exceeds the round limit"
    }
}

/// A winner only exists once the game is over.
pub struct WinnerImpliesFinished;

impl Invariant<GameState> for WinnerImpliesFinished {
    fn holds(state: &GameState) -> bool {
        let valid = state.winner().is_none() || !state.is_active();
        if !valid {
            warn!(winner = ?state.winner(), "Winner declared while game still active");
        }
        valid
    }

    fn description() -> &'static str {
        "A winner is only declared when the game finishes"
    }
}

/// After a play, a finished game always has a winner.
pub struct FinishedHasWinner;

impl Invariant<GameState> for FinishedHasWinner {
    fn holds(state: &GameState) -> bool {
        let valid = state.is_active() || state.winner().is_some();
        if !valid {
            warn!(round = state.round(), "Game finished without a winner");
        }
        valid
    }

    fn description() -> &'static str {
        "A finished game has a winner"
    }
}

/// Every invariant checked after a play.
pub type GameInvariants = (RoundBounded, WinnerImpliesFinished, FinishedHasWinner);
