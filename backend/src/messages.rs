use crate::game::{Game, GameId, GameState, Move};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CreateGameRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct JoinGameRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MoveRequest {
    pub name: String,
    #[serde(rename = "move")]
    pub player_move: String,
}

/// Full game representation sent for every successful call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    pub id: GameId,
    pub player1: String,
    pub player2: Option<String>,
    pub player1_move: Option<Move>,
    pub player2_move: Option<Move>,
    pub state: GameState,
    pub winner: Option<String>,
}

impl From<&Game> for GameResponse {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id(),
            player1: game.player1().to_string(),
            player2: game.player2().map(str::to_string),
            player1_move: game.move1(),
            player2_move: game.move2(),
            state: game.state(),
            winner: game.winner().map(str::to_string),
        }
    }
}

impl From<Game> for GameResponse {
    fn from(game: Game) -> Self {
        Self::from(&game)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub message: String,
}
