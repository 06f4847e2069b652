//! Board coordinates.

use crate::error::{GameError, GameErrorKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Smallest row/column on the board.
pub const BOARD_MIN: u8 = 1;
/// Largest row/column on the board.
pub const BOARD_MAX: u8 = 10;

/// A square on the 10x10 islands board, 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Creates a coordinate, rejecting anything off the board.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::InvalidCoordinate`] if either axis is outside `1..=10`.
    #[instrument]
    pub fn new(row: i16, col: i16) -> Result<Self, GameError> {
        let on_board = |v: i16| (i16::from(BOARD_MIN)..=i16::from(BOARD_MAX)).contains(&v);
        if !on_board(row) || !on_board(col) {
            return Err(GameError::new(GameErrorKind::InvalidCoordinate(row, col)));
        }
        // Both values are in 1..=10 here.
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Returns the row.
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Returns the column.
    pub fn col(&self) -> u8 {
        self.col
    }

    /// Returns the coordinate shifted by the given offset.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::InvalidCoordinate`] if the result leaves the board.
    pub fn offset(&self, rows: i16, cols: i16) -> Result<Self, GameError> {
        Self::new(i16::from(self.row) + rows, i16::from(self.col) + cols)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
