//! One side of the game: identity, board, guesses, and a live handle.

use super::board::Board;
use super::guesses::Guesses;
use super::state::GameProgress;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// Name given to the responder slot until someone joins.
pub const PLACEHOLDER_NAME: &str = "?";

/// Which of the two player slots.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PlayerId {
    /// The player who started the game.
    Player1,
    /// The player who joined it.
    Player2,
}

impl PlayerId {
    /// Returns the other slot.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }
}

/// Gender tag shown next to a player's name.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Gender {
    /// Tagged `f`.
    #[default]
    #[serde(rename = "f")]
    #[strum(serialize = "f")]
    Female,
    /// Tagged `m`.
    #[serde(rename = "m")]
    #[strum(serialize = "m")]
    Male,
}

/// Address of a player's process: the sending half of its inbox.
///
/// Two handles are equal when they feed the same inbox.
#[derive(Debug, Clone)]
pub struct PlayerHandle {
    tx: mpsc::UnboundedSender<GameProgress>,
}

impl PlayerHandle {
    /// Opens a new inbox and returns its handle and receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<GameProgress>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// True while the receiving end is still alive.
    pub fn is_live(&self) -> bool {
        !self.tx.is_closed()
    }

    /// Fire-and-forget send. Delivery failure is dropped.
    #[instrument(skip(self))]
    pub fn send(&self, progress: GameProgress) {
        if self.tx.send(progress).is_err() {
            debug!("Player inbox closed, notification dropped");
        }
    }
}

impl PartialEq for PlayerHandle {
    fn eq(&self, other: &Self) -> bool {
        self.tx.same_channel(&other.tx)
    }
}

impl Eq for PlayerHandle {}

/// A player record. The handle is a reference to an external process and
/// is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize)]
#[setters(prefix = "with_")]
pub struct Player {
    /// Display name.
    name: String,
    /// Gender tag.
    gender: Gender,
    /// Where this player's islands are.
    board: Board,
    /// This player's guesses against the opponent.
    guesses: Guesses,
    /// Live inbox, absent for the placeholder.
    #[serde(skip)]
    handle: Option<PlayerHandle>,
}

impl Player {
    /// Creates a player with an empty board and no guesses.
    #[instrument(skip(name, handle))]
    pub fn new(name: impl Into<String>, gender: Gender, handle: PlayerHandle) -> Self {
        Self {
            name: name.into(),
            gender,
            board: Board::new(),
            guesses: Guesses::new(),
            handle: Some(handle),
        }
    }

    /// The not-yet-joined responder: `"?"`, default gender, no handle.
    pub fn placeholder() -> Self {
        Self {
            name: PLACEHOLDER_NAME.to_string(),
            gender: Gender::default(),
            board: Board::new(),
            guesses: Guesses::new(),
            handle: None,
        }
    }

    /// True for the unjoined responder slot.
    pub fn is_placeholder(&self) -> bool {
        self.handle.is_none() && self.name == PLACEHOLDER_NAME
    }
}
