//! Heuristic move policies for the computer opponent.
//!
//! A policy is a pure function of a board snapshot, the acting player,
//! and a difficulty tier. Randomness is injected so tie-breaks among
//! equivalent cells are reproducible under a seeded source.

use crate::game::{Board, Player, Square};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Difficulty tier of the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniform-random choice among empty cells.
    Easy,
    /// Win if possible, block the opponent, otherwise random.
    Medium,
    /// Win, block, then prefer center, corners, edges.
    Hard,
}

/// The center cell.
const CENTER: (usize, usize) = (1, 1);

/// The four corner cells.
const CORNERS: [(usize, usize); 4] = [(0, 0), (0, 2), (2, 0), (2, 2)];

/// The four edge cells.
const EDGES: [(usize, usize); 4] = [(0, 1), (1, 0), (1, 2), (2, 1)];

/// All 8 winning lines: rows, then columns, then the two diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Chooses a move for `player` under the given difficulty tier.
///
/// Returns `None` only when the board is full. The policy does not check
/// whether the game has already ended; that is the caller's contract.
#[instrument(skip(board, rng))]
pub fn choose_move<R: Rng>(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<(usize, usize)> {
    let cell = match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => winning_move(board, player)
            .or_else(|| winning_move(board, player.opponent()))
            .or_else(|| random_move(board, rng)),
        Difficulty::Hard => winning_move(board, player)
            .or_else(|| winning_move(board, player.opponent()))
            .or_else(|| board.is_empty(CENTER.0, CENTER.1).then_some(CENTER))
            .or_else(|| random_empty(board, &CORNERS, rng))
            .or_else(|| random_empty(board, &EDGES, rng)),
    };
    debug!(?cell, "Policy chose move");
    cell
}

/// Finds a move that completes three-in-a-line for `player`.
///
/// Scans the 8 lines in a fixed order (rows, columns, diagonals) and
/// returns the empty cell of the first line holding exactly two of the
/// player's marks. Used both for winning and, with the opponent's mark,
/// for blocking.
pub fn winning_move(board: &Board, player: Player) -> Option<(usize, usize)> {
    for line in LINES {
        let mut empty = None;
        let mut count = 0;
        for (row, col) in line {
            match board.get(row, col) {
                Some(Square::Occupied(p)) if p == player => count += 1,
                Some(Square::Empty) => empty = Some((row, col)),
                _ => {}
            }
        }
        if count == 2
            && let Some(cell) = empty
        {
            return Some(cell);
        }
    }
    None
}

/// Uniform-random empty cell, or `None` on a full board.
fn random_move<R: Rng>(board: &Board, rng: &mut R) -> Option<(usize, usize)> {
    board.empty_cells().choose(rng).copied()
}

/// Uniform-random empty cell among the given candidates.
fn random_empty<R: Rng>(
    board: &Board,
    candidates: &[(usize, usize)],
    rng: &mut R,
) -> Option<(usize, usize)> {
    let open: Vec<_> = candidates
        .iter()
        .copied()
        .filter(|&(row, col)| board.is_empty(row, col))
        .collect();
    open.choose(rng).copied()
}
