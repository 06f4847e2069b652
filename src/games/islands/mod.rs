mod board;
mod coordinate;
mod exchange;
mod field;
mod game;
mod guesses;
mod island;
mod player;
mod state;
pub mod tuple;

pub use board::Board;
pub use coordinate::{BOARD_MAX, BOARD_MIN, Coordinate};
pub use exchange::{Request, Response, WinStatus};
pub use field::{FieldValue, GameKey};
pub use game::{Game, Overview, PlayerSummary};
pub use guesses::{Guesses, HitOrMiss};
pub use island::{Island, IslandKind};
pub use player::{Gender, PLACEHOLDER_NAME, Player, PlayerHandle, PlayerId};
pub use state::{GameProgress, PlayerProgress, State};
