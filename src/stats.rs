//! Session statistics: outcome counters and per-move history.

use crate::game::Player;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// A single recorded move. Immutable once appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new, Getters)]
pub struct MoveRecord {
    /// Player who made the move.
    player: Player,
    /// Row of the move.
    row: usize,
    /// Column of the move.
    col: usize,
    /// Sequential number of the move within its game (1-based).
    move_number: u32,
}

/// Accumulated statistics for a play session.
///
/// Grows monotonically for the lifetime of the process; nothing is
/// persisted. Derived metrics are recomputed on demand from the counters
/// and the move history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
pub struct SessionStats {
    /// Completed games.
    games_played: u32,
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
    /// Games where the boom effect triggered.
    boom_occurrences: u32,
    /// Every move recorded across the session, in order.
    move_history: Vec<MoveRecord>,
}

impl SessionStats {
    /// Creates an empty statistics tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a move to the history.
    ///
    /// Legality against the board is not re-checked; the caller records
    /// only moves the engine accepted.
    pub fn record_move(&mut self, player: Player, row: usize, col: usize, move_number: u32) {
        debug!(%player, row, col, move_number, "Recording move");
        self.move_history
            .push(MoveRecord::new(player, row, col, move_number));
    }

    /// Records the outcome of a completed game.
    ///
    /// `winner` absent means a draw. Must be called exactly once per
    /// finished game; the session's restart protocol enforces that.
    #[instrument(skip(self))]
    pub fn record_game_result(&mut self, winner: Option<Player>, had_boom: bool) {
        self.games_played += 1;

        match winner {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None => self.draws += 1,
        }

        if had_boom {
            self.boom_occurrences += 1;
        }

        info!(
            games_played = self.games_played,
            ?winner,
            had_boom,
            "Recorded game result"
        );
    }

    /// Win percentage (0-100) for the given player. 0.0 before any game.
    pub fn win_percentage(&self, player: Player) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        let wins = match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        };
        f64::from(wins) / f64::from(self.games_played) * 100.0
    }

    /// Percentage (0-100) of games that ended with a boom. 0.0 before any game.
    pub fn boom_percentage(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        f64::from(self.boom_occurrences) / f64::from(self.games_played) * 100.0
    }

    /// Average number of moves per completed game. 0.0 before any game.
    pub fn average_moves_per_game(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.move_history.len() as f64 / f64::from(self.games_played)
    }

    /// Histogram of moves by board position across the whole session.
    ///
    /// All 9 cells are present, zero-filled where never played.
    pub fn move_frequency_by_position(&self) -> HashMap<(usize, usize), u32> {
        let mut counts: HashMap<(usize, usize), u32> = HashMap::new();
        for row in 0..3 {
            for col in 0..3 {
                counts.insert((row, col), 0);
            }
        }
        for record in &self.move_history {
            if let Some(count) = counts.get_mut(&(*record.row(), *record.col())) {
                *count += 1;
            }
        }
        counts
    }

    /// Snapshot of the derived metrics for display or serialization.
    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            games_played: self.games_played,
            x_wins: self.x_wins,
            o_wins: self.o_wins,
            draws: self.draws,
            boom_occurrences: self.boom_occurrences,
            x_win_percentage: self.win_percentage(Player::X),
            o_win_percentage: self.win_percentage(Player::O),
            boom_percentage: self.boom_percentage(),
            average_moves_per_game: self.average_moves_per_game(),
        }
    }
}

/// Derived session metrics, frozen at the moment of the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct StatsSummary {
    /// Completed games.
    games_played: u32,
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
    /// Games where the boom effect triggered.
    boom_occurrences: u32,
    /// Win percentage for X (0-100).
    x_win_percentage: f64,
    /// Win percentage for O (0-100).
    o_win_percentage: f64,
    /// Boom percentage (0-100).
    boom_percentage: f64,
    /// Average moves per completed game.
    average_moves_per_game: f64,
}

impl std::fmt::Display for StatsSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Games Played: {}", self.games_played)?;
        writeln!(
            f,
            "Player X Wins: {} ({:.1}%)",
            self.x_wins, self.x_win_percentage
        )?;
        writeln!(
            f,
            "Player O Wins: {} ({:.1}%)",
            self.o_wins, self.o_win_percentage
        )?;
        writeln!(f, "Draws: {}", self.draws)?;
        writeln!(
            f,
            "Boom Occurrences: {} ({:.1}%)",
            self.boom_occurrences, self.boom_percentage
        )?;
        write!(
            f,
            "Average Moves Per Game: {:.1}",
            self.average_moves_per_game
        )
    }
}
