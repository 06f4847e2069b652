//! Tests for starting a game.

use islands::{Game, GameProgress, Gender, PLACEHOLDER_NAME, PlayerHandle, Request, Response};

#[test]
fn test_new_fills_player1_from_arguments() {
    let (handle, _inbox) = PlayerHandle::channel();
    let game = Game::new("Eden", "Adam", Gender::Male, handle.clone()).expect("valid game");

    assert_eq!(game.name(), "Eden");
    assert_eq!(game.player1().name(), "Adam");
    assert_eq!(*game.player1().gender(), Gender::Male);
    assert_eq!(game.player1().handle().as_ref(), Some(&handle));
}

#[test]
fn test_new_leaves_player2_as_placeholder() {
    let (handle, _inbox) = PlayerHandle::channel();
    let game = Game::new("Eden", "Adam", Gender::Male, handle).unwrap();

    assert_eq!(game.player2().name(), PLACEHOLDER_NAME);
    assert_eq!(*game.player2().gender(), Gender::default());
    assert!(game.player2().handle().is_none());
    assert!(game.player2().is_placeholder());
}

#[test]
fn test_new_starts_with_empty_exchange_and_fresh_state() {
    let (handle, _inbox) = PlayerHandle::channel();
    let game = Game::new("Eden", "Adam", Gender::Female, handle).unwrap();

    assert_eq!(*game.request(), Request::Empty);
    assert_eq!(*game.response(), Response::Empty);
    assert_eq!(*game.state().game_state(), GameProgress::Initialized);
}

#[test]
fn test_blank_game_name_is_invalid_args() {
    let (handle, _inbox) = PlayerHandle::channel();
    for name in ["", "   ", "\t\n"] {
        let err = Game::new(name, "Adam", Gender::Male, handle.clone()).unwrap_err();
        assert!(err.is_invalid_args(), "{name:?} should be rejected");
    }
}

#[test]
fn test_blank_player_name_is_invalid_args() {
    let (handle, _inbox) = PlayerHandle::channel();
    let err = Game::new("Eden", "", Gender::Male, handle).unwrap_err();
    assert!(err.is_invalid_args());
    assert!(err.to_string().contains("player name"));
}

#[test]
fn test_closed_handle_is_invalid_args() {
    let (handle, inbox) = PlayerHandle::channel();
    drop(inbox);
    let err = Game::new("Eden", "Adam", Gender::Male, handle).unwrap_err();
    assert!(err.is_invalid_args());
    assert!(err.to_string().contains("handle"));
}
