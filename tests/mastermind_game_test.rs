//! Tests for the round state machine.

use strictly_mastermind::{Code, Game, GameError, GameStatus, Role, MAX_ROUNDS};

fn new_game(secret: &str) -> Game {
    let mut game = Game::new();
    game.set_secret(Code::parse(secret).expect("Valid secret"))
        .expect("Secret accepted before play");
    game
}

fn guess(game: &mut Game, raw: &str) -> Result<String, GameError> {
    game.set_guess(Code::parse(raw).expect("Valid guess"));
    game.play()
}

#[test]
fn test_fresh_game() {
    let game = Game::new();
    assert_eq!(game.round(), 0);
    assert!(game.is_active());
    assert_eq!(game.status(), GameStatus::NotStarted);
    assert_eq!(game.winner(), None);
    assert!(game.history().is_empty());
}

#[test]
fn test_play_returns_rendered_feedback() {
    let mut game = new_game("YGBR");
    assert_eq!(guess(&mut game, "WWWO").unwrap(), "----");
    assert_eq!(guess(&mut game, "WGBB").unwrap(), "RR--");
    assert_eq!(game.round(), 2);
    assert_eq!(game.status(), GameStatus::Active);
}

#[test]
fn test_round_increments_by_one_per_play() {
    let mut game = new_game("YGBR");
    for expected in 1..=MAX_ROUNDS {
        guess(&mut game, "WWWW").unwrap();
        assert_eq!(game.round(), expected);
    }
}

#[test]
fn test_guesser_wins_on_exact_match() {
    let mut game = new_game("BYYW");
    guess(&mut game, "WYBB").unwrap();
    assert_eq!(guess(&mut game, "BYYW").unwrap(), "RRRR");

    assert_eq!(game.round(), 2);
    assert!(!game.is_active());
    assert_eq!(game.status(), GameStatus::Finished);
    assert_eq!(game.winner(), Some(Role::Guesser));
    assert_eq!(game.winner_name().as_deref(), Some("Code Breaker"));
}

#[test]
fn test_setter_wins_after_round_limit() {
    let mut game = new_game("YGBR");
    for _ in 0..MAX_ROUNDS - 1 {
        guess(&mut game, "WWWW").unwrap();
        assert_eq!(game.winner(), None);
    }
    guess(&mut game, "WWWW").unwrap();

    assert_eq!(game.round(), MAX_ROUNDS);
    assert_eq!(game.status(), GameStatus::Finished);
    assert_eq!(game.winner(), Some(Role::Setter));
    assert_eq!(game.winner_name().as_deref(), Some("Code Maker"));
}

#[test]
fn test_guesser_wins_on_last_round() {
    let mut game = new_game("YGBR");
    for _ in 0..MAX_ROUNDS - 1 {
        guess(&mut game, "WWWW").unwrap();
    }
    assert_eq!(guess(&mut game, "YGBR").unwrap(), "RRRR");
    assert_eq!(game.winner(), Some(Role::Guesser));
}

#[test]
fn test_play_after_finish_fails_without_mutation() {
    let mut game = new_game("YGBR");
    guess(&mut game, "YGBR").unwrap();
    let before = game.state().clone();

    assert_eq!(guess(&mut game, "WWWW"), Err(GameError::Finished));
    assert_eq!(guess(&mut game, "YGBR"), Err(GameError::Finished));
    assert_eq!(game.state(), &before);
    assert_eq!(game.history().len(), 1);
    assert_eq!(GameError::Finished.to_string(), "Game has finished");
}

#[test]
fn test_play_after_round_limit_fails() {
    let mut game = new_game("YGBR");
    for _ in 0..MAX_ROUNDS {
        guess(&mut game, "WWWW").unwrap();
    }
    assert_eq!(guess(&mut game, "WWWW"), Err(GameError::Finished));
    assert_eq!(game.round(), MAX_ROUNDS);
    assert_eq!(game.winner(), Some(Role::Setter));
}

#[test]
fn test_state_serializes() {
    let mut game = new_game("YGBR");
    guess(&mut game, "YGBR").unwrap();
    let json = serde_json::to_value(game.state()).unwrap();
    assert_eq!(json["round"], 1);
    assert_eq!(json["active"], false);
    assert_eq!(json["winner"], "Guesser");
}
