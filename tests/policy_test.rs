//! Tests for the heuristic move policies.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tic_tac_boom::{Board, Difficulty, Player, Square, choose_move, winning_move};

/// Builds a board from three rows of "X", "O", or "" cells.
fn board(rows: [[&str; 3]; 3]) -> Board {
    let mut board = Board::new();
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let square = match *cell {
                "X" => Square::Occupied(Player::X),
                "O" => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
            board.set(r, c, square).unwrap();
        }
    }
    board
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn test_easy_picks_an_empty_cell() {
    let board = board([["X", "O", "X"], ["", "O", ""], ["", "", ""]]);
    let mut rng = rng();
    for _ in 0..50 {
        let (row, col) = choose_move(&board, Player::O, Difficulty::Easy, &mut rng)
            .expect("board has empty cells");
        assert!(board.is_empty(row, col), "({row}, {col}) is occupied");
    }
}

#[test]
fn test_full_board_yields_no_move() {
    let board = board([["X", "O", "X"], ["X", "O", "O"], ["O", "X", "X"]]);
    let mut rng = rng();
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        assert_eq!(choose_move(&board, Player::X, difficulty, &mut rng), None);
    }
}

#[test]
fn test_easy_is_reproducible_under_a_seed() {
    let board = board([["X", "", ""], ["", "O", ""], ["", "", ""]]);
    let mut a = StdRng::seed_from_u64(7);
    let mut b = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        assert_eq!(
            choose_move(&board, Player::X, Difficulty::Easy, &mut a),
            choose_move(&board, Player::X, Difficulty::Easy, &mut b),
        );
    }
}

#[test]
fn test_winning_move_in_row() {
    let board = board([["X", "X", ""], ["", "", ""], ["", "", ""]]);
    assert_eq!(winning_move(&board, Player::X), Some((0, 2)));
    assert_eq!(winning_move(&board, Player::O), None);
}

#[test]
fn test_winning_move_in_column() {
    let board = board([["X", "", ""], ["X", "", ""], ["", "", ""]]);
    assert_eq!(winning_move(&board, Player::X), Some((2, 0)));
}

#[test]
fn test_winning_move_on_diagonals() {
    let main = board([["X", "", ""], ["", "X", ""], ["", "", ""]]);
    assert_eq!(winning_move(&main, Player::X), Some((2, 2)));

    let anti = board([["", "", "O"], ["", "O", ""], ["", "", ""]]);
    assert_eq!(winning_move(&anti, Player::O), Some((2, 0)));
}

#[test]
fn test_blocked_line_is_not_a_winning_move() {
    let board = board([["X", "X", "O"], ["", "", ""], ["", "", ""]]);
    assert_eq!(winning_move(&board, Player::X), None);
}

#[test]
fn test_medium_and_hard_take_the_win() {
    let board = board([["X", "X", ""], ["", "", ""], ["", "", ""]]);
    let mut rng = rng();
    for difficulty in [Difficulty::Medium, Difficulty::Hard] {
        assert_eq!(
            choose_move(&board, Player::X, difficulty, &mut rng),
            Some((0, 2))
        );
    }
}

#[test]
fn test_medium_and_hard_block_the_opponent() {
    let board = board([["O", "O", ""], ["", "", ""], ["", "", ""]]);
    let mut rng = rng();
    for difficulty in [Difficulty::Medium, Difficulty::Hard] {
        assert_eq!(
            choose_move(&board, Player::X, difficulty, &mut rng),
            Some((0, 2))
        );
    }
}

#[test]
fn test_winning_beats_blocking() {
    // X can win at (0, 2); O threatens at (1, 2). Winning comes first.
    let board = board([["X", "X", ""], ["O", "O", ""], ["", "", ""]]);
    let mut rng = rng();
    assert_eq!(
        choose_move(&board, Player::X, Difficulty::Medium, &mut rng),
        Some((0, 2))
    );
    assert_eq!(
        choose_move(&board, Player::X, Difficulty::Hard, &mut rng),
        Some((0, 2))
    );
}

#[test]
fn test_hard_takes_the_center() {
    let board = board([["X", "", ""], ["", "", ""], ["", "", ""]]);
    let mut rng = rng();
    assert_eq!(
        choose_move(&board, Player::O, Difficulty::Hard, &mut rng),
        Some((1, 1))
    );
}

#[test]
fn test_hard_prefers_corners_when_center_taken() {
    const CORNERS: [(usize, usize); 4] = [(0, 0), (0, 2), (2, 0), (2, 2)];
    let board = board([["", "", ""], ["", "O", ""], ["", "", ""]]);
    let mut rng = rng();
    for _ in 0..50 {
        let cell = choose_move(&board, Player::X, Difficulty::Hard, &mut rng)
            .expect("corners are open");
        assert!(CORNERS.contains(&cell), "{cell:?} is not a corner");
    }
}

#[test]
fn test_hard_falls_back_to_edges() {
    const EDGES: [(usize, usize); 4] = [(0, 1), (1, 0), (1, 2), (2, 1)];
    // Center and corners occupied, no winning or blocking cell for O:
    // only the edges remain.
    let board = board([["X", "", "O"], ["", "X", ""], ["O", "", "X"]]);
    let mut rng = rng();
    for _ in 0..50 {
        let cell = choose_move(&board, Player::O, Difficulty::Hard, &mut rng)
            .expect("edges are open");
        assert!(EDGES.contains(&cell), "{cell:?} is not an edge");
        assert!(board.is_empty(cell.0, cell.1));
    }
}
