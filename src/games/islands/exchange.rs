//! The last command a game accepted and the last reply it produced.

use super::board::Board;
use super::guesses::HitOrMiss;
use super::island::IslandKind;
use super::player::{Gender, PlayerId};
use super::tuple::{self, TupleShape};
use serde::ser::{SerializeSeq, Serialize, Serializer};

/// A command sent to the game.
///
/// Encodes as `[tag, args...]`; [`Request::Empty`] encodes as `[]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Request {
    /// No request yet.
    #[default]
    Empty,
    /// Second player joins.
    AddPlayer {
        /// Joining player's name.
        name: String,
        /// Joining player's gender tag.
        gender: Gender,
    },
    /// Move an island of `player`'s board so its upper-left is at (row, col).
    PositionIsland {
        /// Whose board.
        player: PlayerId,
        /// Which island.
        island: IslandKind,
        /// Anchor row.
        row: i16,
        /// Anchor column.
        col: i16,
    },
    /// Lock `player`'s islands in place.
    SetIslands {
        /// Whose board.
        player: PlayerId,
    },
    /// `player` fires at (row, col) on the opponent's board.
    GuessCoordinate {
        /// Who is guessing.
        player: PlayerId,
        /// Target row.
        row: i16,
        /// Target column.
        col: i16,
    },
}

impl Request {
    /// True for the "no request yet" sentinel.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl TupleShape for Request {
    fn arity(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::SetIslands { .. } => 2,
            Self::AddPlayer { .. } => 3,
            Self::GuessCoordinate { .. } => 4,
            Self::PositionIsland { .. } => 5,
        }
    }

    fn serialize_elements<S: SerializeSeq>(&self, seq: &mut S) -> Result<(), S::Error> {
        if self.is_empty() {
            return Ok(());
        }
        let tag: &'static str = self.into();
        seq.serialize_element(tag)?;
        match self {
            Self::Empty => Ok(()),
            Self::AddPlayer { name, gender } => {
                seq.serialize_element(name)?;
                seq.serialize_element(gender)
            }
            Self::PositionIsland {
                player,
                island,
                row,
                col,
            } => {
                seq.serialize_element(player)?;
                seq.serialize_element(island)?;
                seq.serialize_element(row)?;
                seq.serialize_element(col)
            }
            Self::SetIslands { player } => seq.serialize_element(player),
            Self::GuessCoordinate { player, row, col } => {
                seq.serialize_element(player)?;
                seq.serialize_element(row)?;
                seq.serialize_element(col)
            }
        }
    }
}

impl Serialize for Request {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        tuple::serialize(self, serializer)
    }
}

/// Whether a guess ended the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WinStatus {
    /// Play continues.
    NoWin,
    /// The guesser has won.
    Win,
}

/// A reply produced by the game.
///
/// Encodes as `[tag, payload...]`; [`Response::Empty`] encodes as `[]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Response {
    /// No response yet.
    #[default]
    Empty,
    /// `["ok"]`
    Ok,
    /// `["ok", board]`, returned when islands are set.
    IslandsSet(Board),
    /// `["error", reason]`
    Error(String),
    /// `[hit_or_miss, forested_island_or_"none", win_status]`
    Guess {
        /// Whether the guess hit.
        outcome: HitOrMiss,
        /// Island fully covered by this guess, if any.
        forested: Option<IslandKind>,
        /// Whether the guess won the game.
        win: WinStatus,
    },
}

impl Response {
    /// True for the "no response yet" sentinel.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl TupleShape for Response {
    fn arity(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Ok => 1,
            Self::IslandsSet(_) | Self::Error(_) => 2,
            Self::Guess { .. } => 3,
        }
    }

    fn serialize_elements<S: SerializeSeq>(&self, seq: &mut S) -> Result<(), S::Error> {
        match self {
            Self::Empty => Ok(()),
            Self::Ok => seq.serialize_element("ok"),
            Self::IslandsSet(board) => {
                seq.serialize_element("ok")?;
                seq.serialize_element(board)
            }
            Self::Error(reason) => {
                seq.serialize_element("error")?;
                seq.serialize_element(reason)
            }
            Self::Guess {
                outcome,
                forested,
                win,
            } => {
                seq.serialize_element(outcome)?;
                match forested {
                    Some(kind) => seq.serialize_element(kind)?,
                    None => seq.serialize_element("none")?,
                }
                seq.serialize_element(win)
            }
        }
    }
}

impl Serialize for Response {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        tuple::serialize(self, serializer)
    }
}
