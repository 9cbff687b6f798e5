use thiserror::Error;

pub type GameId = i64;

/// Request-scoped failures raised by the game store. Each carries the id of
/// the game the caller referenced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Game with ID '{0}' was not found")]
    NotFound(GameId),

    #[error("Game with ID '{0}' has already been joined by another player.")]
    AlreadyJoined(GameId),

    #[error("Game with ID '{0}' is not joinable")]
    NotJoinable(GameId),

    #[error("Game with ID '{0}' is not ready for moves to be made. Likely awaiting second player.")]
    NotReadyForMoves(GameId),
}

impl GameError {
    pub fn game_id(&self) -> GameId {
        match self {
            GameError::NotFound(id)
            | GameError::AlreadyJoined(id)
            | GameError::NotJoinable(id)
            | GameError::NotReadyForMoves(id) => *id,
        }
    }
}
