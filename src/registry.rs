//! Registry of running games, keyed by name.

use crate::config::NamesConfig;
use crate::error::{GameError, GameErrorKind};
use crate::games::islands::{Game, Gender, Overview, PlayerHandle};
use crate::names::random_name;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Collisions tolerated per name source before giving up on it.
const NAME_ATTEMPTS: usize = 16;

/// Shared table of running games.
///
/// Games are stored by value; callers take a copy with [`GameRegistry::get`],
/// apply updates, and write it back with [`GameRegistry::update`].
#[derive(Debug, Clone)]
pub struct GameRegistry {
    games: Arc<Mutex<HashMap<String, Game>>>,
    names: Arc<NamesConfig>,
}

impl GameRegistry {
    /// Creates an empty registry that names games from `names`.
    #[instrument(skip(names))]
    pub fn new(names: NamesConfig) -> Self {
        info!("Creating game registry");
        Self {
            games: Arc::new(Mutex::new(HashMap::new())),
            names: Arc::new(names),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Game>> {
        self.games.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts a game under a fresh haiku name with `player_name` as player 1.
    ///
    /// # Errors
    ///
    /// Returns the constructor's invalid-arguments error, or
    /// [`GameErrorKind::NameSpaceExhausted`] if no unused name turns up.
    #[instrument(skip(self, player_name, handle))]
    pub fn start_game(
        &self,
        player_name: impl Into<String>,
        gender: Gender,
        handle: PlayerHandle,
    ) -> Result<Game, GameError> {
        let mut games = self.lock();

        let name = self.fresh_name(&games)?;
        let game = Game::new(name.clone(), player_name, gender, handle)?;
        games.insert(name.clone(), game.clone());
        info!(game = %name, "Started game");
        Ok(game)
    }

    /// Tries haiku names first, then random tokens, a bounded number of times each.
    fn fresh_name(&self, games: &HashMap<String, Game>) -> Result<String, GameError> {
        let haiku = std::iter::repeat_with(|| self.names.haiku_name()).take(NAME_ATTEMPTS);
        let random = std::iter::repeat_with(random_name).take(NAME_ATTEMPTS);
        for name in haiku.chain(random) {
            if !games.contains_key(&name) {
                return Ok(name);
            }
            debug!(%name, "Generated name already taken, retrying");
        }
        warn!(games = games.len(), "No unused game name found");
        Err(GameError::new(GameErrorKind::NameSpaceExhausted(
            NAME_ATTEMPTS * 2,
        )))
    }

    /// Returns a copy of the named game.
    #[instrument(skip(self))]
    pub fn get(&self, name: &str) -> Option<Game> {
        let game = self.lock().get(name).cloned();
        if game.is_none() {
            debug!(game = name, "Game not found");
        }
        game
    }

    /// Stores `game`, replacing any game with the same name.
    #[instrument(skip(self, game), fields(game = %game.name()))]
    pub fn update(&self, game: Game) {
        self.lock().insert(game.name().clone(), game);
        debug!("Game updated");
    }

    /// Names of all running games, sorted.
    #[instrument(skip(self))]
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<_> = self.lock().keys().cloned().collect();
        names.sort();
        debug!(count = names.len(), "Listed games");
        names
    }

    /// Public overviews of all running games, sorted by name.
    #[instrument(skip(self))]
    pub fn overviews(&self) -> Vec<Overview> {
        let mut overviews: Vec<_> = self.lock().values().map(Game::overview).collect();
        overviews.sort_by(|a, b| a.game_name.cmp(&b.game_name));
        overviews
    }

    /// Removes the named game and returns it.
    #[instrument(skip(self))]
    pub fn end_game(&self, name: &str) -> Option<Game> {
        let game = self.lock().remove(name);
        match &game {
            Some(_) => info!(game = name, "Ended game"),
            None => warn!(game = name, "Tried to end unknown game"),
        }
        game
    }
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new(NamesConfig::default())
    }
}
