//! Island shapes.

use super::coordinate::Coordinate;
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::instrument;

/// The five island shapes a board holds.
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
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IslandKind {
    /// Five squares in a C shape.
    Atoll,
    /// A single square.
    Dot,
    /// Four squares in an L.
    LShape,
    /// Four squares in an S.
    SShape,
    /// A 2x2 block.
    Square,
}

impl IslandKind {
    /// Offsets from the upper-left anchor, as (row, col).
    fn offsets(self) -> &'static [(i16, i16)] {
        match self {
            Self::Atoll => &[(0, 0), (0, 1), (1, 1), (2, 0), (2, 1)],
            Self::Dot => &[(0, 0)],
            Self::LShape => &[(0, 0), (1, 0), (2, 0), (2, 1)],
            Self::SShape => &[(0, 1), (0, 2), (1, 0), (1, 1)],
            Self::Square => &[(0, 0), (0, 1), (1, 0), (1, 1)],
        }
    }
}

/// An island placed on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Island {
    coordinates: BTreeSet<Coordinate>,
}

impl Island {
    /// Builds an island of `kind` anchored at `upper_left`.
    ///
    /// # Errors
    ///
    /// Returns an invalid-coordinate error if any square falls off the board.
    #[instrument]
    pub fn new(kind: IslandKind, upper_left: Coordinate) -> Result<Self, GameError> {
        let coordinates = kind
            .offsets()
            .iter()
            .map(|&(r, c)| upper_left.offset(r, c))
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Self { coordinates })
    }

    /// Squares covered by the island.
    pub fn coordinates(&self) -> &BTreeSet<Coordinate> {
        &self.coordinates
    }

    /// True if the two islands share any square.
    pub fn overlaps(&self, other: &Island) -> bool {
        !self.coordinates.is_disjoint(&other.coordinates)
    }
}
