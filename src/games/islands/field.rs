//! Map-style access over the game's fixed set of fields.

use super::exchange::{Request, Response};
use super::player::{Player, PlayerId};
use super::state::State;
use serde::Serialize;

/// The six fields of a [`Game`](super::Game). No other key exists.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum GameKey {
    /// `name`
    Name,
    /// `player1`
    Player1,
    /// `player2`
    Player2,
    /// `request`
    Request,
    /// `response`
    Response,
    /// `state`
    State,
}

impl From<PlayerId> for GameKey {
    fn from(id: PlayerId) -> Self {
        match id {
            PlayerId::Player1 => GameKey::Player1,
            PlayerId::Player2 => GameKey::Player2,
        }
    }
}

/// The value stored under a [`GameKey`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Value of `name`.
    Name(String),
    /// Value of `player1` or `player2`.
    Player(Player),
    /// Value of `request`.
    Request(Request),
    /// Value of `response`.
    Response(Response),
    /// Value of `state`.
    State(State),
}

impl FieldValue {
    /// True if this value has the shape stored under `key`.
    pub fn fits(&self, key: GameKey) -> bool {
        matches!(
            (key, self),
            (GameKey::Name, FieldValue::Name(_))
                | (GameKey::Player1 | GameKey::Player2, FieldValue::Player(_))
                | (GameKey::Request, FieldValue::Request(_))
                | (GameKey::Response, FieldValue::Response(_))
                | (GameKey::State, FieldValue::State(_))
        )
    }
}
