//! The game aggregate: two players, shared progress, and the last exchange.
//!
//! A [`Game`] is a value. Every update consumes it and hands back the next
//! value with exactly one path replaced, so a controlling task can thread
//! it through its loop without locks.

use super::board::Board;
use super::coordinate::Coordinate;
use super::exchange::{Request, Response};
use super::field::{FieldValue, GameKey};
use super::guesses::HitOrMiss;
use super::player::{Gender, Player, PlayerHandle, PlayerId};
use super::state::State;
use crate::error::{GameError, GameErrorKind};
use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// A game between `player1`, who started it, and `player2`, who joins it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Game {
    /// Game name, fixed at construction.
    name: String,
    /// The initiating player.
    player1: Player,
    /// The responder. A placeholder until someone joins.
    player2: Player,
    /// Last command accepted.
    request: Request,
    /// Last reply produced.
    response: Response,
    /// Progress of the game and each side.
    state: State,
}

/// Public name and gender of one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct PlayerSummary {
    /// Display name.
    pub name: String,
    /// Gender tag.
    pub gender: Gender,
}

/// Reduced public view of a game: names and genders only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    /// The game's name.
    pub game_name: String,
    /// The initiating player.
    pub player1: PlayerSummary,
    /// The responder.
    pub player2: PlayerSummary,
}

impl Game {
    /// Starts a game with `player_name` in the first slot.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::InvalidArgs`] if either name is blank or the
    /// handle's inbox is already closed.
    #[instrument(skip(name, player_name, handle))]
    pub fn new(
        name: impl Into<String>,
        player_name: impl Into<String>,
        gender: Gender,
        handle: PlayerHandle,
    ) -> Result<Self, GameError> {
        let name = name.into();
        let player_name = player_name.into();

        if name.trim().is_empty() {
            warn!("Rejected game with blank name");
            return Err(GameError::invalid_args("game name must not be blank"));
        }
        if player_name.trim().is_empty() {
            warn!(game = %name, "Rejected game with blank player name");
            return Err(GameError::invalid_args("player name must not be blank"));
        }
        if !handle.is_live() {
            warn!(game = %name, "Rejected game with closed player handle");
            return Err(GameError::invalid_args("player handle is not live"));
        }

        info!(game = %name, player = %player_name, %gender, "Creating game");
        Ok(Self {
            name,
            player1: Player::new(player_name, gender, handle),
            player2: Player::placeholder(),
            request: Request::Empty,
            response: Response::Empty,
            state: State::new(),
        })
    }

    /// Returns the player in slot `id`.
    pub fn player(&self, id: PlayerId) -> &Player {
        match id {
            PlayerId::Player1 => &self.player1,
            PlayerId::Player2 => &self.player2,
        }
    }

    /// The other slot.
    pub fn opponent_id(id: PlayerId) -> PlayerId {
        id.opponent()
    }

    // ─────────────────────────────────────────────────────────────
    //  Indexed access
    // ─────────────────────────────────────────────────────────────

    /// Returns a copy of the value under `key`.
    pub fn field(&self, key: GameKey) -> FieldValue {
        match key {
            GameKey::Name => FieldValue::Name(self.name.clone()),
            GameKey::Player1 => FieldValue::Player(self.player1.clone()),
            GameKey::Player2 => FieldValue::Player(self.player2.clone()),
            GameKey::Request => FieldValue::Request(self.request.clone()),
            GameKey::Response => FieldValue::Response(self.response.clone()),
            GameKey::State => FieldValue::State(self.state),
        }
    }

    /// Looks up a field by its name. Unknown names yield `None`.
    #[instrument(skip(self), fields(game = %self.name))]
    pub fn fetch(&self, key: &str) -> Option<FieldValue> {
        match key.parse::<GameKey>() {
            Ok(key) => Some(self.field(key)),
            Err(_) => {
                debug!(key, "No such field");
                None
            }
        }
    }

    /// Applies `f` to the value under `key` and stores the result.
    ///
    /// Returns the previous value alongside the updated game.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::FieldMismatch`] if `f` produces a value of a
    /// different shape than `key` holds, and [`GameErrorKind::InvalidArgs`]
    /// if it produces a blank name.
    #[instrument(skip(self, f), fields(game = %self.name))]
    pub fn get_and_update<F>(mut self, key: GameKey, f: F) -> Result<(FieldValue, Self), GameError>
    where
        F: FnOnce(FieldValue) -> FieldValue,
    {
        let old = self.update_in(key, f)?;
        Ok((old, self))
    }

    /// Removes the value under `key`, leaving its empty value behind.
    ///
    /// `request` and `response` reset to empty, `state` to a fresh state and
    /// `player2` to the placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::FieldRequired`] for `name` and `player1`,
    /// which have no empty value.
    #[instrument(skip(self), fields(game = %self.name))]
    pub fn pop(mut self, key: GameKey) -> Result<(FieldValue, Self), GameError> {
        let old = match key {
            GameKey::Name | GameKey::Player1 => {
                return Err(GameError::new(GameErrorKind::FieldRequired(key.into())));
            }
            GameKey::Player2 => {
                FieldValue::Player(std::mem::replace(&mut self.player2, Player::placeholder()))
            }
            GameKey::Request => FieldValue::Request(std::mem::take(&mut self.request)),
            GameKey::Response => FieldValue::Response(std::mem::take(&mut self.response)),
            GameKey::State => FieldValue::State(std::mem::take(&mut self.state)),
        };
        Ok((old, self))
    }

    fn update_in<F>(&mut self, key: GameKey, f: F) -> Result<FieldValue, GameError>
    where
        F: FnOnce(FieldValue) -> FieldValue,
    {
        let old = self.field(key);
        let new = f(old.clone());
        self.put(key, new)?;
        Ok(old)
    }

    fn put(&mut self, key: GameKey, value: FieldValue) -> Result<(), GameError> {
        if !value.fits(key) {
            warn!(%key, "Update produced a value of the wrong shape");
            return Err(GameError::new(GameErrorKind::FieldMismatch(key.into())));
        }
        match value {
            FieldValue::Name(name) => {
                if name.trim().is_empty() {
                    return Err(GameError::invalid_args("game name must not be blank"));
                }
                self.name = name;
            }
            FieldValue::Player(p) if key == GameKey::Player1 => self.player1 = p,
            FieldValue::Player(p) => self.player2 = p,
            FieldValue::Request(r) => self.request = r,
            FieldValue::Response(r) => self.response = r,
            FieldValue::State(s) => self.state = s,
        }
        Ok(())
    }

    /// Nested update of one player, through the `player1`/`player2` key.
    fn map_player(mut self, id: PlayerId, f: impl FnOnce(Player) -> Player) -> Self {
        let result = self.update_in(GameKey::from(id), |value| match value {
            FieldValue::Player(p) => FieldValue::Player(f(p)),
            other => other,
        });
        if let Err(err) = result {
            warn!(player = %id, %err, "Player update rejected");
        }
        self
    }

    // ─────────────────────────────────────────────────────────────
    //  Path updates
    // ─────────────────────────────────────────────────────────────

    /// Replaces `id`'s board.
    #[instrument(skip(self, board), fields(game = %self.name))]
    pub fn update_board(self, id: PlayerId, board: Board) -> Self {
        debug!(player = %id, "Updating board");
        self.map_player(id, |p| p.with_board(board))
    }

    /// Records one guess by `id`.
    #[instrument(skip(self), fields(game = %self.name))]
    pub fn update_guesses(self, id: PlayerId, outcome: HitOrMiss, coordinate: Coordinate) -> Self {
        debug!(player = %id, %outcome, %coordinate, "Recording guess");
        self.map_player(id, |p| {
            let guesses = p.guesses().clone().add(outcome, coordinate);
            p.with_guesses(guesses)
        })
    }

    /// Replaces name, gender and handle of slot `id` together. Board and
    /// guesses are kept.
    #[instrument(skip(self, name, handle), fields(game = %self.name))]
    pub fn update_player(
        self,
        id: PlayerId,
        name: impl Into<String>,
        gender: Gender,
        handle: PlayerHandle,
    ) -> Self {
        let name = name.into();
        info!(player = %id, %name, %gender, "Updating player identity");
        self.map_player(id, |p| {
            p.with_name(name)
                .with_gender(gender)
                .with_handle(Some(handle))
        })
    }

    /// Sends the overall game progress to `id`'s inbox. Fire-and-forget:
    /// the game comes back unchanged whether or not delivery succeeds.
    #[instrument(skip(self), fields(game = %self.name))]
    pub fn notify_player(self, id: PlayerId) -> Self {
        let progress = *self.state.game_state();
        match self.player(id).handle() {
            Some(handle) => {
                debug!(player = %id, %progress, "Notifying player");
                handle.send(progress);
            }
            None => debug!(player = %id, "No handle for player, skipping notification"),
        }
        self
    }

    /// Returns `id`'s board.
    pub fn player_board(&self, id: PlayerId) -> &Board {
        self.player(id).board()
    }

    /// Replaces the state record.
    #[instrument(skip(self), fields(game = %self.name))]
    pub fn update_state(mut self, state: State) -> Self {
        self.state = state;
        self
    }

    /// Replaces the last request.
    #[instrument(skip(self), fields(game = %self.name))]
    pub fn update_request(mut self, request: Request) -> Self {
        self.request = request;
        self
    }

    /// Replaces the last response.
    #[instrument(skip(self), fields(game = %self.name))]
    pub fn update_response(mut self, response: Response) -> Self {
        self.response = response;
        self
    }

    /// Names and genders of both players, without boards, guesses, handles
    /// or the last exchange.
    pub fn overview(&self) -> Overview {
        let summary = |p: &Player| PlayerSummary::new(p.name().clone(), *p.gender());
        Overview {
            game_name: self.name.clone(),
            player1: summary(&self.player1),
            player2: summary(&self.player2),
        }
    }
}
