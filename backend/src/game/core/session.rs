use super::error::{GameError, GameId};
use super::moves::Move;
use serde::{Deserialize, Serialize};

pub const TIE: &str = "Tie";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    WaitingForPlayer,
    WaitingForMoves,
    Completed,
}

/// Which slot a player occupies in a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Player1,
    Player2,
}

/// Result of recording a move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Move stored, still waiting on the opponent
    Recorded(Seat),
    /// Both moves are in and the game is over
    Completed { winner: String },
    /// The name matched neither player, nothing changed
    NotAParticipant,
}

/// A single best-of-one match (pure logic, no I/O)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: GameId,
    player1: String,
    player2: Option<String>,
    move1: Option<Move>,
    move2: Option<Move>,
    state: GameState,
    winner: Option<String>,
}

impl Game {
    pub fn new(id: GameId, player1: impl Into<String>) -> Self {
        Self {
            id,
            player1: player1.into(),
            player2: None,
            move1: None,
            move2: None,
            state: GameState::WaitingForPlayer,
            winner: None,
        }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn player1(&self) -> &str {
        &self.player1
    }

    pub fn player2(&self) -> Option<&str> {
        self.player2.as_deref()
    }

    pub fn move1(&self) -> Option<Move> {
        self.move1
    }

    pub fn move2(&self) -> Option<Move> {
        self.move2
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// Player1 takes precedence when both players share a name, so a game
    /// where player1 also joined as player2 stays in WaitingForMoves forever.
    pub fn seat_of(&self, player: &str) -> Option<Seat> {
        if player == self.player1 {
            Some(Seat::Player1)
        } else if self.player2.as_deref() == Some(player) {
            Some(Seat::Player2)
        } else {
            None
        }
    }

    /// Seat the second player. Leaves the game untouched on error.
    pub fn join(&mut self, player2: &str) -> Result<(), GameError> {
        if self.player2.as_deref() == Some(player2) {
            return Err(GameError::AlreadyJoined(self.id));
        }
        if self.state != GameState::WaitingForPlayer {
            return Err(GameError::NotJoinable(self.id));
        }

        self.player2 = Some(player2.to_string());
        self.state = GameState::WaitingForMoves;
        Ok(())
    }

    /// Record a move for whichever seat `player` occupies, completing the
    /// game once both moves are present. Leaves the game untouched on error.
    pub fn record_move(&mut self, player: &str, mv: Move) -> Result<MoveOutcome, GameError> {
        if self.state != GameState::WaitingForMoves {
            return Err(GameError::NotReadyForMoves(self.id));
        }

        let Some(seat) = self.seat_of(player) else {
            return Ok(MoveOutcome::NotAParticipant);
        };

        match seat {
            Seat::Player1 => self.move1 = Some(mv),
            Seat::Player2 => self.move2 = Some(mv),
        }

        let (Some(move1), Some(move2)) = (self.move1, self.move2) else {
            return Ok(MoveOutcome::Recorded(seat));
        };

        let winner = self.resolve(move1, move2);
        self.state = GameState::Completed;
        self.winner = Some(winner.clone());
        Ok(MoveOutcome::Completed { winner })
    }

    fn resolve(&self, move1: Move, move2: Move) -> String {
        if move1 == move2 {
            TIE.to_string()
        } else if move1.beats(move2) {
            self.player1.clone()
        } else {
            // state is WaitingForMoves, so player2 is always seated here
            self.player2.clone().unwrap_or_default()
        }
    }
}
