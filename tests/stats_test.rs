//! Tests for the session statistics aggregator.

use tic_tac_boom::{Player, SessionStats};

#[test]
fn test_fresh_stats_are_all_zero() {
    let stats = SessionStats::new();
    assert_eq!(*stats.games_played(), 0);
    assert_eq!(*stats.x_wins(), 0);
    assert_eq!(*stats.o_wins(), 0);
    assert_eq!(*stats.draws(), 0);
    assert_eq!(*stats.boom_occurrences(), 0);
    assert!(stats.move_history().is_empty());
}

#[test]
fn test_percentages_guard_against_zero_games() {
    let stats = SessionStats::new();
    assert_eq!(stats.win_percentage(Player::X), 0.0);
    assert_eq!(stats.win_percentage(Player::O), 0.0);
    assert_eq!(stats.boom_percentage(), 0.0);
    assert_eq!(stats.average_moves_per_game(), 0.0);
}

#[test]
fn test_three_game_outcomes() {
    let mut stats = SessionStats::new();
    stats.record_game_result(Some(Player::X), false);
    stats.record_game_result(Some(Player::O), true);
    stats.record_game_result(None, false);

    assert_eq!(*stats.games_played(), 3);
    assert_eq!(*stats.x_wins(), 1);
    assert_eq!(*stats.o_wins(), 1);
    assert_eq!(*stats.draws(), 1);
    assert_eq!(*stats.boom_occurrences(), 1);

    let third = 100.0 / 3.0;
    assert!((stats.win_percentage(Player::X) - third).abs() < 1e-9);
    assert!((stats.win_percentage(Player::O) - third).abs() < 1e-9);
    assert!((stats.boom_percentage() - third).abs() < 1e-9);
}

#[test]
fn test_average_moves_per_game() {
    let mut stats = SessionStats::new();
    // First game: 5 moves, X wins.
    for n in 1..=5 {
        let player = if n % 2 == 1 { Player::X } else { Player::O };
        stats.record_move(player, 0, 0, n);
    }
    stats.record_game_result(Some(Player::X), false);
    // Second game: 9 moves, draw.
    for n in 1..=9 {
        let player = if n % 2 == 1 { Player::X } else { Player::O };
        stats.record_move(player, 1, 1, n);
    }
    stats.record_game_result(None, false);
    // Third game: 4 moves, abandoned-but-recorded as O win.
    for n in 1..=4 {
        let player = if n % 2 == 1 { Player::X } else { Player::O };
        stats.record_move(player, 2, 2, n);
    }
    stats.record_game_result(Some(Player::O), false);

    assert_eq!(stats.move_history().len(), 18);
    assert!((stats.average_moves_per_game() - 6.0).abs() < 1e-9);
}

#[test]
fn test_move_frequency_covers_all_nine_cells_when_empty() {
    let stats = SessionStats::new();
    let frequency = stats.move_frequency_by_position();
    assert_eq!(frequency.len(), 9);
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(frequency.get(&(row, col)), Some(&0));
        }
    }
}

#[test]
fn test_move_frequency_counts_across_games() {
    let mut stats = SessionStats::new();
    stats.record_move(Player::X, 1, 1, 1);
    stats.record_move(Player::O, 0, 0, 2);
    stats.record_game_result(Some(Player::X), false);
    stats.record_move(Player::X, 1, 1, 1);
    stats.record_game_result(None, false);

    let frequency = stats.move_frequency_by_position();
    assert_eq!(frequency.len(), 9);
    assert_eq!(frequency.get(&(1, 1)), Some(&2));
    assert_eq!(frequency.get(&(0, 0)), Some(&1));
    assert_eq!(frequency.get(&(2, 2)), Some(&0));
}

#[test]
fn test_move_records_keep_their_order() {
    let mut stats = SessionStats::new();
    stats.record_move(Player::X, 0, 0, 1);
    stats.record_move(Player::O, 2, 1, 2);

    let history = stats.move_history();
    assert_eq!(*history[0].player(), Player::X);
    assert_eq!(*history[0].move_number(), 1);
    assert_eq!(*history[1].player(), Player::O);
    assert_eq!((*history[1].row(), *history[1].col()), (2, 1));
}

#[test]
fn test_summary_reflects_the_counters() {
    let mut stats = SessionStats::new();
    stats.record_move(Player::X, 0, 0, 1);
    stats.record_move(Player::O, 1, 1, 2);
    stats.record_game_result(Some(Player::X), true);

    let summary = stats.summary();
    assert_eq!(*summary.games_played(), 1);
    assert_eq!(*summary.x_wins(), 1);
    assert_eq!(*summary.x_win_percentage(), 100.0);
    assert_eq!(*summary.boom_percentage(), 100.0);
    assert_eq!(*summary.average_moves_per_game(), 2.0);

    let rendered = summary.to_string();
    assert!(rendered.contains("Games Played: 1"));
    assert!(rendered.contains("Boom Occurrences: 1 (100.0%)"));
}
