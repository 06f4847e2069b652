//! Error types for the islands game.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong inside the game aggregate or one of its collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// Constructor arguments failed validation.
    #[display("invalid arguments: {}", _0)]
    InvalidArgs(String),
    /// An indexed update produced a value of the wrong shape for its key.
    #[display("value does not fit field `{}`", _0)]
    FieldMismatch(&'static str),
    /// The field has no empty value and cannot be cleared.
    #[display("field `{}` is required and cannot be cleared", _0)]
    FieldRequired(&'static str),
    /// Row or column outside the board.
    #[display("coordinate ({}, {}) is off the board", _0, _1)]
    InvalidCoordinate(i16, i16),
    /// Island would cover squares already taken by another island.
    #[display("{} overlaps an island already on the board", _0)]
    OverlappingIsland(String),
    /// Every generated game name collided with a running game.
    #[display("no unused game name after {} attempts", _0)]
    NameSpaceExhausted(usize),
}

/// Game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Game error: {} at {}:{}", kind, file, line)]
pub struct GameError {
    /// Error kind.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for [`GameErrorKind::InvalidArgs`].
    #[track_caller]
    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::new(GameErrorKind::InvalidArgs(message.into()))
    }

    /// Returns true if this is an [`GameErrorKind::InvalidArgs`] error.
    pub fn is_invalid_args(&self) -> bool {
        matches!(self.kind, GameErrorKind::InvalidArgs(_))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
