//! Islands - the game aggregate for a two-player Game of Islands
//!
//! A [`Game`] pairs two [`Player`] records with a shared [`State`] and the
//! last [`Request`]/[`Response`] exchanged between the players' tasks.
//!
//! # Architecture
//!
//! - **Game**: value-typed aggregate; every update returns the next value
//! - **Collaborators**: board, islands, coordinates, guesses, state
//! - **Tuple encoding**: requests and replies serialize as tagged JSON arrays
//! - **Names**: random tokens and haiku-style game names
//! - **Registry**: running games keyed by name
//!
//! # Example
//!
//! ```
//! use islands::{Game, Gender, PlayerHandle, PlayerId};
//!
//! # fn example() -> Result<(), islands::GameError> {
//! let (handle, _inbox) = PlayerHandle::channel();
//! let game = Game::new("Eden", "Adam", Gender::Male, handle)?;
//! let game = game.notify_player(PlayerId::Player1);
//! assert_eq!(game.player2().name(), "?");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod games;
mod names;
mod registry;

// Crate-level exports - Errors
pub use error::{ConfigError, GameError, GameErrorKind};

// Crate-level exports - Configuration
pub use config::{NAMES_CONFIG_ENV, NamesConfig};

// Crate-level exports - Name generation
pub use names::{RANDOM_NAME_MAX, RANDOM_NAME_MIN, random_name};

// Crate-level exports - Registry
pub use registry::GameRegistry;

// Crate-level exports - Game types
pub use games::islands::{
    BOARD_MAX, BOARD_MIN, Board, Coordinate, FieldValue, Game, GameKey, GameProgress, Gender,
    Guesses, HitOrMiss, Island, IslandKind, Overview, PLACEHOLDER_NAME, Player, PlayerHandle,
    PlayerId, PlayerProgress, PlayerSummary, Request, Response, State, WinStatus,
};

// Crate-level exports - Tuple encoding
pub use games::islands::tuple::{self, TupleShape};
