pub mod error;
pub mod moves;
pub mod session;

pub use error::{GameError, GameId};
pub use moves::{Move, UnknownMove};
pub use session::{Game, GameState, MoveOutcome, Seat, TIE};
