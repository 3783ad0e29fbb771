//! Peg vocabulary for mastermind.
//!
//! Both peg sets are closed enums carrying their canonical display
//! character, so every match over them stays exhaustive.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A colored code peg.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum CodePeg {
    /// Yellow (`Y`).
    #[display("Y")]
    Yellow,
    /// Green (`G`).
    #[display("G")]
    Green,
    /// Orange (`O`).
    #[display("O")]
    Orange,
    /// Red (`R`).
    #[display("R")]
    Red,
    /// Black (`B`).
    #[display("B")]
    Black,
    /// White (`W`).
    #[display("W")]
    White,
}

impl CodePeg {
    /// All code peg colors in vocabulary order.
    pub const ALL: [CodePeg; 6] = [
        CodePeg::Yellow,
        CodePeg::Green,
        CodePeg::Orange,
        CodePeg::Red,
        CodePeg::Black,
        CodePeg::White,
    ];

    /// Returns the canonical character for this color.
    pub const fn code(self) -> char {
        match self {
            CodePeg::Yellow => 'Y',
            CodePeg::Green => 'G',
            CodePeg::Orange => 'O',
            CodePeg::Red => 'R',
            CodePeg::Black => 'B',
            CodePeg::White => 'W',
        }
    }

    /// Looks up a color by its canonical character (case-sensitive).
    #[instrument]
    pub fn from_code(c: char) -> Option<Self> {
        <CodePeg as strum::IntoEnumIterator>::iter().find(|peg| peg.code() == c)
    }

    /// Label with the code character bracketed, e.g. `[Y]ellow`.
    pub const fn label(self) -> &'static str {
        match self {
            CodePeg::Yellow => "[Y]ellow",
            CodePeg::Green => "[G]reen",
            CodePeg::Orange => "[O]range",
            CodePeg::Red => "[R]ed",
            CodePeg::Black => "[B]lack",
            CodePeg::White => "[W]hite",
        }
    }
}

/// Human-readable list of valid colors, as shown in prompts and errors.
pub const COLOR_CHOICES: &str = "[Y]ellow, [O]range, [G]reen, [R]ed, [B]lack, and [W]hite";

/// A key peg reporting match quality for one guessed peg.
///
/// Variant order is the display order; `Ord` is derived from it so a
/// sorted feedback vector reads exact, partial, empty.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum FeedbackPeg {
    /// Right color in the right position (red key peg).
    #[display("R")]
    Exact,
    /// Right color in the wrong position (white key peg).
    #[display("W")]
    Partial,
    /// No match.
    #[display("-")]
    Empty,
}

impl FeedbackPeg {
    /// All feedback symbols in display order.
    pub const ALL: [FeedbackPeg; 3] = [FeedbackPeg::Exact, FeedbackPeg::Partial, FeedbackPeg::Empty];

    /// Returns the canonical display character.
    pub const fn code(self) -> char {
        match self {
            FeedbackPeg::Exact => 'R',
            FeedbackPeg::Partial => 'W',
            FeedbackPeg::Empty => '-',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_round_trips_every_color() {
        for peg in CodePeg::ALL {
            assert_eq!(CodePeg::from_code(peg.code()), Some(peg));
        }
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert_eq!(CodePeg::from_code('y'), None);
        assert_eq!(CodePeg::from_code('X'), None);
    }

    #[test]
    fn test_display_matches_code() {
        for peg in CodePeg::ALL {
            assert_eq!(peg.to_string(), peg.code().to_string());
        }
        for peg in FeedbackPeg::ALL {
            assert_eq!(peg.to_string(), peg.code().to_string());
        }
    }

    #[test]
    fn test_feedback_order_is_display_order() {
        let mut pegs = vec![FeedbackPeg::Empty, FeedbackPeg::Partial, FeedbackPeg::Exact];
        pegs.sort();
        assert_eq!(pegs, FeedbackPeg::ALL.to_vec());
    }

    #[test]
    fn test_color_choices_lists_every_label() {
        for peg in CodePeg::ALL {
            assert!(COLOR_CHOICES.contains(peg.label()));
        }
    }
}
