//! Hit/miss history of a player's guesses against the opponent.

use super::coordinate::Coordinate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::instrument;

/// Outcome of a single guess.
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
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HitOrMiss {
    /// The guess landed on an island.
    Hit,
    /// The guess landed on open water.
    Miss,
}

/// Coordinates a player has guessed, split by outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guesses {
    hits: BTreeSet<Coordinate>,
    misses: BTreeSet<Coordinate>,
}

impl Guesses {
    /// Empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one guess. Repeating a guess leaves the history unchanged.
    #[instrument(skip(self))]
    pub fn add(mut self, outcome: HitOrMiss, coordinate: Coordinate) -> Self {
        match outcome {
            HitOrMiss::Hit => self.hits.insert(coordinate),
            HitOrMiss::Miss => self.misses.insert(coordinate),
        };
        self
    }

    /// Coordinates that hit.
    pub fn hits(&self) -> &BTreeSet<Coordinate> {
        &self.hits
    }

    /// Coordinates that missed.
    pub fn misses(&self) -> &BTreeSet<Coordinate> {
        &self.misses
    }

    /// Total number of recorded guesses.
    pub fn len(&self) -> usize {
        self.hits.len() + self.misses.len()
    }

    /// True if nothing has been guessed yet.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty() && self.misses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_hit_and_miss() {
        let c = Coordinate::new(3, 4).unwrap();
        let d = Coordinate::new(5, 6).unwrap();
        let guesses = Guesses::new().add(HitOrMiss::Hit, c).add(HitOrMiss::Miss, d);
        assert!(guesses.hits().contains(&c));
        assert!(guesses.misses().contains(&d));
        assert_eq!(guesses.len(), 2);
    }

    #[test]
    fn test_repeat_guess_does_not_grow() {
        let c = Coordinate::new(3, 4).unwrap();
        let guesses = Guesses::new().add(HitOrMiss::Hit, c).add(HitOrMiss::Hit, c);
        assert_eq!(guesses.len(), 1);
    }
}
