//! Core domain types for tic-tac-boom.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 game board, addressed by `(row, col)` with both in `[0, 2]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    squares: [Square; 9],
}

impl Board {
    /// Board side length.
    pub const SIZE: usize = 3;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Checks whether the coordinates address a cell on the board.
    pub fn in_bounds(row: usize, col: usize) -> bool {
        row < Self::SIZE && col < Self::SIZE
    }

    /// Gets the square at the given coordinates.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        if !Self::in_bounds(row, col) {
            return None;
        }
        Some(self.squares[row * Self::SIZE + col])
    }

    /// Sets the square at the given coordinates.
    pub fn set(&mut self, row: usize, col: usize, square: Square) -> Result<(), &'static str> {
        if !Self::in_bounds(row, col) {
            return Err("Coordinates out of bounds");
        }
        self.squares[row * Self::SIZE + col] = square;
        Ok(())
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Square::Empty))
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Counts the squares occupied by the given player.
    pub fn count_of(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Returns the coordinates of all empty squares, row-major.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for row in 0..Self::SIZE {
            for col in 0..Self::SIZE {
                if self.is_empty(row, col) {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..Self::SIZE {
            for col in 0..Self::SIZE {
                let symbol = match self.squares[row * Self::SIZE + col] {
                    Square::Empty => ".".to_string(),
                    Square::Occupied(p) => p.to_string(),
                };
                result.push_str(&symbol);
                if col < Self::SIZE - 1 {
                    result.push('|');
                }
            }
            if row < Self::SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    current_player: Player,
    /// Game status.
    status: GameStatus,
}

impl GameState {
    /// Creates a new game state: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner, if the game ended in a win.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Writes a mark (unchecked - use Game::try_move for validation).
    pub(super) fn place(&mut self, row: usize, col: usize, player: Player) {
        self.board
            .set(row, col, Square::Occupied(player))
            .expect("caller validates coordinates");
    }

    /// Hands the turn to the other player.
    pub(super) fn flip_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Sets the game status.
    pub(super) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
