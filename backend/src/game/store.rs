use super::core::{Game, GameError, GameId, Move, MoveOutcome};
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::{debug, info};

/// In-memory collection of games keyed by id.
///
/// Every mutation runs under the shard write guard of the game's entry, so
/// operations on one game never interleave while games in other shards stay
/// available. Callers always get an owned snapshot back.
pub struct GameStore {
    games: DashMap<GameId, Game>,
    next_id: AtomicI64,
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStore {
    pub fn new() -> Self {
        Self {
            games: DashMap::new(),
            next_id: AtomicI64::new(0),
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.games.len()
    }

    /// Create a game hosted by `player1` and return it
    pub fn create(&self, player1: &str) -> Game {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let game = Game::new(id, player1);
        self.games.insert(id, game.clone());
        info!(game_id = id, player1, "Created game");
        game
    }

    /// Seat `player2` in a game that is waiting for an opponent
    pub fn join(&self, game_id: GameId, player2: &str) -> Result<Game, GameError> {
        let mut game = self
            .games
            .get_mut(&game_id)
            .ok_or(GameError::NotFound(game_id))?;

        game.join(player2)?;

        info!(game_id, player1 = game.player1(), player2, "Game joined");
        Ok(game.clone())
    }

    /// Record a move and resolve the game once both players have moved
    pub fn make_move(&self, game_id: GameId, player: &str, mv: Move) -> Result<Game, GameError> {
        let mut game = self
            .games
            .get_mut(&game_id)
            .ok_or(GameError::NotFound(game_id))?;

        match game.record_move(player, mv)? {
            MoveOutcome::Recorded(seat) => {
                debug!(game_id, player, ?seat, %mv, "Move recorded");
            }
            MoveOutcome::Completed { winner } => {
                info!(game_id, player, %mv, %winner, "Game completed");
            }
            MoveOutcome::NotAParticipant => {
                debug!(game_id, player, "Move from non-participant ignored");
            }
        }

        Ok(game.clone())
    }

    pub fn get(&self, game_id: GameId) -> Result<Game, GameError> {
        let game = self
            .games
            .get(&game_id)
            .ok_or(GameError::NotFound(game_id))?;
        debug!(game_id, state = ?game.state(), "Fetched game");
        Ok(game.clone())
    }
}
