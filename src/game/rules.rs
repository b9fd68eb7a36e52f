//! Game engine: move validation and terminal-state detection.

use super::types::{Board, GameState, GameStatus, Square};
use tracing::{debug, instrument, warn};

/// Reasons a move can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column is outside [0, 2].
    #[display("Coordinates out of bounds (rows and columns are 0-2)")]
    OutOfBounds,
    /// Target square already holds a mark.
    #[display("Square is already occupied")]
    Occupied,
    /// Game has already ended.
    #[display("Game is already over")]
    GameOver,
}

/// Tic-tac-boom game engine.
///
/// Owns the board, the turn order, and win/draw detection. Once the
/// status leaves `InProgress` no further moves are accepted; `reset`
/// replaces the state wholesale.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Attempts a move for the current player, reporting success as a bool.
    ///
    /// Returns `false` without mutating anything if the game is over, the
    /// square is occupied, or the coordinates are out of range.
    pub fn apply_move(&mut self, row: usize, col: usize) -> bool {
        self.try_move(row, col).is_ok()
    }

    /// Attempts a move for the current player, with a typed rejection.
    ///
    /// On success writes the current player's mark, checks for a win
    /// through the played cell, then for a full-board draw, and otherwise
    /// hands the turn to the other player.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] describing why the move was rejected; the
    /// state is left unchanged.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn try_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.state.status() != GameStatus::InProgress {
            warn!("Move attempted on finished game");
            return Err(MoveError::GameOver);
        }
        if !Board::in_bounds(row, col) {
            warn!(row, col, "Move attempted outside the board");
            return Err(MoveError::OutOfBounds);
        }
        if !self.state.board().is_empty(row, col) {
            warn!(row, col, "Move attempted on occupied square");
            return Err(MoveError::Occupied);
        }

        let player = self.state.current_player();
        self.state.place(row, col, player);

        // A move can only create a line through its own cell, so the win
        // check is anchored at (row, col) rather than rescanning the board.
        if self.state.board().line_through(row, col) {
            debug!(row, col, %player, "Winning line completed");
            self.state.set_status(GameStatus::Won(player));
        } else if self.state.board().is_full() {
            debug!("Board full with no winner");
            self.state.set_status(GameStatus::Draw);
        } else {
            self.state.flip_player();
        }

        Ok(())
    }

    /// Replaces the state with a fresh initial one. Statistics are untouched.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = GameState::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Checks whether the mark at `(row, col)` completes a line of three.
    ///
    /// Tests the cell's row, its column, the main diagonal only when
    /// `row == col`, and the anti-diagonal only when `row + col == 2`.
    /// Diagonals off the played cell are deliberately not examined: a
    /// mark off a diagonal cannot have completed it.
    pub fn line_through(&self, row: usize, col: usize) -> bool {
        let Some(Square::Occupied(player)) = self.get(row, col) else {
            return false;
        };
        let owns = |r: usize, c: usize| self.get(r, c) == Some(Square::Occupied(player));

        if (0..Self::SIZE).all(|c| owns(row, c)) {
            return true;
        }
        if (0..Self::SIZE).all(|r| owns(r, col)) {
            return true;
        }
        if row == col && (0..Self::SIZE).all(|i| owns(i, i)) {
            return true;
        }
        if row + col == Self::SIZE - 1 && (0..Self::SIZE).all(|i| owns(i, Self::SIZE - 1 - i)) {
            return true;
        }
        false
    }
}
