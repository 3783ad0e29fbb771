//! Scoring engine: compares a guess against the secret code.
//!
//! Scoring is two-pass. The exact pass consumes every secret peg that
//! matches in place; the partial pass then matches remaining guess pegs
//! against whatever is left of the secret. A secret peg is consumed at most
//! once, so repeated colors never double count.

use super::code::Code;
use super::pegs::{CodePeg, FeedbackPeg};
use super::player::Role;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Key pegs for one guess, sorted exact, partial, empty.
///
/// Feedback carries counts only; peg order says nothing about which guess
/// position produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback {
    pegs: Vec<FeedbackPeg>,
}

impl Feedback {
    /// Returns the key pegs in display order.
    pub fn pegs(&self) -> &[FeedbackPeg] {
        &self.pegs
    }

    /// Number of exact matches.
    pub fn exact_count(&self) -> usize {
        self.count(FeedbackPeg::Exact)
    }

    /// Number of color-only matches.
    pub fn partial_count(&self) -> usize {
        self.count(FeedbackPeg::Partial)
    }

    /// True when every peg is an exact match.
    pub fn is_solved(&self) -> bool {
        !self.pegs.is_empty() && self.pegs.iter().all(|p| *p == FeedbackPeg::Exact)
    }

    fn count(&self, kind: FeedbackPeg) -> usize {
        self.pegs.iter().filter(|p| **p == kind).count()
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for peg in &self.pegs {
            write!(f, "{}", peg.code())?;
        }
        Ok(())
    }
}

/// Error raised when a guess cannot be compared with the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ScoreError {
    /// Guess and secret differ in length.
    #[display("Length must be {} to match {}", expected, Role::Setter)]
    LengthMismatch {
        /// Length of the secret.
        expected: usize,
    },
}

impl std::error::Error for ScoreError {}

/// Scores `guess` against `secret`.
///
/// # Errors
///
/// Returns [`ScoreError::LengthMismatch`] when the sequences differ in length.
#[instrument]
pub fn score(guess: &[CodePeg], secret: &[CodePeg]) -> Result<Feedback, ScoreError> {
    if guess.len() != secret.len() {
        return Err(ScoreError::LengthMismatch {
            expected: secret.len(),
        });
    }

    let feedback = grade(guess, secret);
    debug!(%feedback, "Scored guess");
    Ok(feedback)
}

/// Runs both passes over equal-length sequences.
fn grade(guess: &[CodePeg], secret: &[CodePeg]) -> Feedback {
    let mut pegs = Vec::with_capacity(guess.len());
    let mut pool = Vec::with_capacity(secret.len());
    let mut unmatched = Vec::with_capacity(guess.len());

    for (g, s) in guess.iter().zip(secret) {
        if g == s {
            pegs.push(FeedbackPeg::Exact);
        } else {
            pool.push(*s);
            unmatched.push(*g);
        }
    }

    // Colors are fungible; any matching pool instance may be consumed.
    for g in unmatched {
        if let Some(idx) = pool.iter().position(|s| *s == g) {
            pool.swap_remove(idx);
            pegs.push(FeedbackPeg::Partial);
        }
    }

    pegs.sort();
    pegs.resize(guess.len(), FeedbackPeg::Empty);
    Feedback { pegs }
}

impl Code {
    /// Scores this code as a guess against `secret`.
    ///
    /// Codes always share a length, so this cannot fail.
    pub fn score_against(&self, secret: &Code) -> Feedback {
        grade(self.pegs(), secret.pegs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CodePeg::*;

    fn render(guess: &str, secret: &str) -> String {
        let guess = Code::parse(guess).unwrap();
        let secret = Code::parse(secret).unwrap();
        score(guess.pegs(), secret.pegs()).unwrap().to_string()
    }

    #[test]
    fn test_no_match() {
        assert_eq!(render("WWWO", "YGBR"), "----");
    }

    #[test]
    fn test_exact_only() {
        assert_eq!(render("WGBB", "YGBR"), "RR--");
    }

    #[test]
    fn test_partial_only() {
        assert_eq!(render("WGBB", "BYYW"), "WW--");
    }

    #[test]
    fn test_exact_and_partial() {
        assert_eq!(render("WYBB", "BYYW"), "RWW-");
    }

    #[test]
    fn test_exact_consumes_secret_peg() {
        assert_eq!(render("YYYY", "YGBR"), "R---");
    }

    #[test]
    fn test_later_exact_is_not_stolen_by_earlier_partial() {
        // The G at guess[0] must not consume the secret G that guess[1] hits in place.
        assert_eq!(render("GGOO", "YGBR"), "R---");
    }

    #[test]
    fn test_length_mismatch_names_secret_length() {
        let err = score(&[Black, Black], &[Yellow, Green, Orange, Red]).unwrap_err();
        assert_eq!(err, ScoreError::LengthMismatch { expected: 4 });
        assert_eq!(err.to_string(), "Length must be 4 to match Code Maker");
    }

    #[test]
    fn test_score_against_agrees_with_score() {
        let guess = Code::parse("WYBB").unwrap();
        let secret = Code::parse("BYYW").unwrap();
        assert_eq!(
            guess.score_against(&secret),
            score(guess.pegs(), secret.pegs()).unwrap()
        );
    }

    #[test]
    fn test_counts() {
        let feedback = score(&[White, Yellow, Black, Black], &[Black, Yellow, Yellow, White]).unwrap();
        assert_eq!(feedback.exact_count(), 1);
        assert_eq!(feedback.partial_count(), 2);
        assert!(!feedback.is_solved());
    }

    #[test]
    fn test_empty_sequences_are_not_solved() {
        let feedback = score(&[], &[]).unwrap();
        assert!(feedback.pegs().is_empty());
        assert!(!feedback.is_solved());
    }
}
