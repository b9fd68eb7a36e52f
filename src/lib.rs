//! Tic Tac Boom game core.
//!
//! Tic-tac-toe with a celebratory twist: wins have a chance to go boom.
//! This library is the game core only; rendering, input, and timers
//! belong to whatever presentation layer drives it.
//!
//! # Architecture
//!
//! - **Game**: board state machine with move validation and win/draw detection
//! - **Policy**: heuristic computer opponent in three difficulty tiers
//! - **Stats**: outcome and per-move aggregation across a session
//! - **Session**: composes the above, with optional opponent and stats slots
//!
//! # Example
//!
//! ```
//! use tic_tac_boom::{Difficulty, GameSession, Opponent, Player};
//!
//! # fn main() -> Result<(), tic_tac_boom::MoveError> {
//! let opponent = Opponent::new(Player::O, Difficulty::Medium);
//! let mut session = GameSession::new(Some(opponent), true);
//!
//! // Human plays X; events tell the front-end what to do next.
//! let events = session.apply_move(1, 1)?;
//! # let _ = events;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod policy;
mod session;
mod stats;

// Crate-level exports - Board state machine
pub use game::{Board, Game, GameState, GameStatus, MoveError, Player, Square};

// Crate-level exports - Move policy
pub use policy::{Difficulty, choose_move, winning_move};

// Crate-level exports - Session management
pub use session::{GameSession, Opponent, SessionEvent};

// Crate-level exports - Statistics
pub use stats::{MoveRecord, SessionStats, StatsSummary};
