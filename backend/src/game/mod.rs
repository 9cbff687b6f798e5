pub mod core;
pub mod store;

pub use self::core::{Game, GameError, GameId, GameState, Move, TIE};
pub use store::GameStore;
