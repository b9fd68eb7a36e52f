mod rules;
mod types;

pub use rules::{Game, MoveError};
pub use types::{Board, GameState, GameStatus, Player, Square};
