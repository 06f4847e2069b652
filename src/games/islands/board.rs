//! A player's board: where their islands sit.

use super::island::{Island, IslandKind};
use crate::error::{GameError, GameErrorKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Islands keyed by shape. At most one island of each kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    islands: BTreeMap<IslandKind, Island>,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places (or moves) the island of `kind`, returning the new board.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::OverlappingIsland`] if `island` covers a
    /// square held by an island of a different kind.
    #[instrument(skip(self, island))]
    pub fn position_island(mut self, kind: IslandKind, island: Island) -> Result<Self, GameError> {
        let overlaps = self
            .islands
            .iter()
            .any(|(k, other)| *k != kind && other.overlaps(&island));
        if overlaps {
            return Err(GameError::new(GameErrorKind::OverlappingIsland(
                kind.to_string(),
            )));
        }
        debug!(%kind, "Positioned island");
        self.islands.insert(kind, island);
        Ok(self)
    }

    /// The island of `kind`, if placed.
    pub fn island(&self, kind: IslandKind) -> Option<&Island> {
        self.islands.get(&kind)
    }

    /// True once every kind has been placed.
    pub fn all_islands_positioned(&self) -> bool {
        IslandKind::iter().all(|k| self.islands.contains_key(&k))
    }
}
