//! Tests for the console session.

use std::io::Cursor;
use strictly_mastermind::{ConsoleConfig, ConsoleError, ConsoleSession, Role};

fn play(input: &str, config: ConsoleConfig) -> (Result<(), ConsoleError>, Option<Role>, u8, String) {
    let mut session = ConsoleSession::new(config, Cursor::new(input.to_string()), Vec::new());
    let result = session.run();
    let (game, output) = session.into_parts();
    (
        result,
        game.winner(),
        game.round(),
        String::from_utf8(output).expect("UTF-8 output"),
    )
}

fn quiet() -> ConsoleConfig {
    ConsoleConfig::new(false, 5, 3)
}

#[test]
fn test_breaker_wins() {
    let (result, winner, round, output) = play("BYYW\nWGBB\nWYBB\nBYYW\n", quiet());
    assert!(result.is_ok());
    assert_eq!(winner, Some(Role::Guesser));
    assert_eq!(round, 3);
    assert!(output.contains("Round 1: WW--"));
    assert!(output.contains("Round 2: RWW-"));
    assert!(output.contains("Round 3: RRRR"));
    assert!(output.contains("Code Breaker WIN!!!"));
}

#[test]
fn test_maker_wins_after_ten_rounds() {
    let input = format!("YGBR\n{}", "WWWW\n".repeat(10));
    let (result, winner, round, output) = play(&input, quiet());
    assert!(result.is_ok());
    assert_eq!(winner, Some(Role::Setter));
    assert_eq!(round, 10);
    assert!(output.contains("Round 10: ----"));
    assert!(output.contains("Code Maker WIN!!!"));
}

#[test]
fn test_invalid_input_is_reported_and_retried() {
    let (result, winner, round, output) = play("\nYG\nYGBX\nYGBR\nyyyy\nYGBR\n", quiet());
    assert!(result.is_ok());
    assert_eq!(winner, Some(Role::Guesser));
    assert_eq!(round, 1);
    assert!(output.contains("String shouldn't be empty"));
    assert!(output.contains("Length must be 4 characters"));
    assert_eq!(output.matches("Code color is unacceptable").count(), 2);
}

#[test]
fn test_secret_is_scrolled_away() {
    let (_, _, _, output) = play("YGBR\nYGBR\n", quiet());
    assert!(output.contains("-----\n"));
    assert!(output.contains("|\n|\n|\n"));
    assert!(output.contains("Code breaker, it time for you to guess!!"));
}

#[test]
fn test_rules_follow_config() {
    let (_, _, _, shown) = play("YGBR\nYGBR\n", ConsoleConfig::default());
    let (_, _, _, hidden) = play("YGBR\nYGBR\n", quiet());
    assert!(shown.contains("Welcome to Mastermind Game!"));
    assert!(shown.contains("Result Key Peg: RW--"));
    assert!(!hidden.contains("Result Key Peg"));
}

#[test]
fn test_input_closed_before_secret() {
    let (result, winner, round, _) = play("", quiet());
    assert!(matches!(result, Err(ConsoleError::InputClosed)));
    assert_eq!(winner, None);
    assert_eq!(round, 0);
}
