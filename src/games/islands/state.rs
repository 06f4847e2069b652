//! Replicated game-progress record.

use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Overall progress of a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GameProgress {
    /// Only the first player is present.
    #[default]
    Initialized,
    /// Both players have joined.
    PlayersSet,
    /// Waiting on player 1 to guess.
    Player1Turn,
    /// Waiting on player 2 to guess.
    Player2Turn,
    /// Someone has won.
    GameOver,
}

/// Per-player setup progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerProgress {
    /// Islands may still be moved.
    #[default]
    IslandsNotSet,
    /// Islands are locked in.
    IslandsSet,
}

/// Progress for the game and each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct State {
    /// Overall progress, relayed to players by notifications.
    game_state: GameProgress,
    /// Player 1 setup.
    player1_state: PlayerProgress,
    /// Player 2 setup.
    player2_state: PlayerProgress,
}

impl State {
    /// Fresh state: initialized, no islands set.
    pub fn new() -> Self {
        Self::default()
    }
}
