//! Tests for map-style access over game fields.

use islands::{
    FieldValue, Game, GameErrorKind, GameKey, GameProgress, Gender, PlayerHandle, Request,
    Response, State,
};
use strum::IntoEnumIterator;
use tokio::sync::mpsc::UnboundedReceiver;

fn eden() -> (Game, UnboundedReceiver<GameProgress>) {
    let (handle, inbox) = PlayerHandle::channel();
    let game = Game::new("Eden", "Adam", Gender::Male, handle).expect("valid game");
    (game, inbox)
}

#[test]
fn test_fetch_every_key() {
    let (game, _inbox) = eden();
    for key in GameKey::iter() {
        let value = game.fetch(&key.to_string()).expect("known key");
        assert!(value.fits(key), "{key} returned the wrong shape");
    }
}

#[test]
fn test_fetch_unknown_key_is_none() {
    let (game, _inbox) = eden();
    assert!(game.fetch("player3").is_none());
    assert!(game.fetch("").is_none());
    assert!(game.fetch("Name").is_none());
}

#[test]
fn test_fetch_name() {
    let (game, _inbox) = eden();
    assert_eq!(game.fetch("name"), Some(FieldValue::Name("Eden".to_string())));
}

#[test]
fn test_get_and_update_returns_old_value() {
    let (game, _inbox) = eden();
    let request = Request::SetIslands {
        player: islands::PlayerId::Player1,
    };

    let (old, updated) = game
        .get_and_update(GameKey::Request, |_| FieldValue::Request(request.clone()))
        .expect("request fits");

    assert_eq!(old, FieldValue::Request(Request::Empty));
    assert_eq!(*updated.request(), request);
}

#[test]
fn test_get_and_update_nested_player_field() {
    let (game, _inbox) = eden();
    let before = game.player2().clone();

    let (_, updated) = game
        .get_and_update(GameKey::Player1, |value| match value {
            FieldValue::Player(p) => FieldValue::Player(p.with_gender(Gender::Female)),
            other => other,
        })
        .unwrap();

    assert_eq!(*updated.player1().gender(), Gender::Female);
    assert_eq!(updated.player1().name(), "Adam");
    assert_eq!(*updated.player2(), before);
}

#[test]
fn test_get_and_update_wrong_shape_is_rejected() {
    let (game, _inbox) = eden();
    let err = game
        .get_and_update(GameKey::State, |_| FieldValue::Name("oops".into()))
        .unwrap_err();
    assert_eq!(err.kind, GameErrorKind::FieldMismatch("state"));
}

#[test]
fn test_get_and_update_blank_name_is_rejected() {
    let (game, _inbox) = eden();
    let err = game
        .get_and_update(GameKey::Name, |_| FieldValue::Name(String::new()))
        .unwrap_err();
    assert!(err.is_invalid_args());
}

#[test]
fn test_pop_clears_to_empty_values() {
    let (game, _inbox) = eden();
    let game = game
        .update_response(Response::Ok)
        .update_state(State::new().with_game_state(GameProgress::GameOver));

    let (old, game) = game.pop(GameKey::Response).unwrap();
    assert_eq!(old, FieldValue::Response(Response::Ok));
    assert!(game.response().is_empty());

    let (old, game) = game.pop(GameKey::State).unwrap();
    assert_eq!(
        old,
        FieldValue::State(State::new().with_game_state(GameProgress::GameOver))
    );
    assert_eq!(*game.state(), State::new());
}

#[test]
fn test_pop_player2_restores_placeholder() {
    let (game, _inbox) = eden();
    let (eve_handle, _eve_inbox) = PlayerHandle::channel();
    let game = game.update_player(islands::PlayerId::Player2, "Eve", Gender::Female, eve_handle);

    let (old, game) = game.pop(GameKey::Player2).unwrap();

    match old {
        FieldValue::Player(p) => assert_eq!(p.name(), "Eve"),
        other => panic!("expected a player, got {other:?}"),
    }
    assert!(game.player2().is_placeholder());
}

#[test]
fn test_pop_required_fields_fails() {
    let (game, _inbox) = eden();
    for key in [GameKey::Name, GameKey::Player1] {
        let err = game.clone().pop(key).unwrap_err();
        assert!(matches!(err.kind, GameErrorKind::FieldRequired(_)));
    }
}

#[test]
fn test_path_update_matches_keyed_update() {
    let (game, _inbox) = eden();
    let board = islands::Board::new()
        .position_island(
            islands::IslandKind::Dot,
            islands::Island::new(
                islands::IslandKind::Dot,
                islands::Coordinate::new(6, 6).unwrap(),
            )
            .unwrap(),
        )
        .unwrap();

    let by_path = game
        .clone()
        .update_board(islands::PlayerId::Player2, board.clone());
    let (old, by_key) = game
        .get_and_update(GameKey::Player2, |value| match value {
            FieldValue::Player(p) => FieldValue::Player(p.with_board(board)),
            other => other,
        })
        .unwrap();

    assert_eq!(by_path, by_key);
    assert!(old.fits(GameKey::Player2));
    assert!(!old.fits(GameKey::State));
}

#[test]
fn test_player_value_rejected_under_other_keys() {
    let (game, _inbox) = eden();
    let player = game.player1().clone();
    for key in [GameKey::Name, GameKey::Request, GameKey::Response, GameKey::State] {
        let err = game
            .clone()
            .get_and_update(key, |_| FieldValue::Player(player.clone()))
            .unwrap_err();
        assert!(matches!(err.kind, GameErrorKind::FieldMismatch(_)));
    }
}
