//! Game session: composes the engine with optional capability slots.
//!
//! A session owns one [`Game`] plus two optional collaborators: a
//! heuristic [`Opponent`] and a [`SessionStats`] sink. Either slot may be
//! absent, in which case the corresponding behavior is a no-op. The
//! session never owns a clock; anything timed (the opponent's paced
//! reply, the boom animation) is emitted as a [`SessionEvent`] for the
//! presentation layer to schedule.

use crate::game::{Game, GameStatus, MoveError, Player};
use crate::policy::{Difficulty, choose_move};
use crate::stats::{SessionStats, StatsSummary};
use derive_getters::Getters;
use derive_new::new;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};

/// Probability that a win triggers the boom effect.
const BOOM_CHANCE: f64 = 0.3;

/// A statistics summary is surfaced after every this many games.
const SUMMARY_INTERVAL: u32 = 5;

/// Capability slot: a heuristic opponent playing one of the marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new, Getters)]
pub struct Opponent {
    /// Which mark the opponent plays.
    mark: Player,
    /// Difficulty tier of its move policy.
    difficulty: Difficulty,
}

/// Request emitted by the session for the presentation layer to interpret.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The opponent should move now. The front-end schedules the call to
    /// [`GameSession::opponent_move`] with whatever pacing it wants.
    OpponentTurn,
    /// The game reached a terminal state.
    GameOver {
        /// The winner, absent for a draw.
        winner: Option<Player>,
    },
    /// Celebratory boom effect requested.
    Boom,
    /// A periodic statistics summary is ready to surface.
    StatsReady(StatsSummary),
}

/// A single play session: one active game, statistics across restarts.
#[derive(Debug)]
pub struct GameSession {
    game: Game,
    opponent: Option<Opponent>,
    stats: Option<SessionStats>,
    move_count: u32,
    had_boom: bool,
    rng: StdRng,
}

impl GameSession {
    /// Creates a session with an OS-seeded random source.
    #[instrument]
    pub fn new(opponent: Option<Opponent>, track_stats: bool) -> Self {
        Self::with_rng(opponent, track_stats, StdRng::from_entropy())
    }

    /// Creates a session with an explicit random source, for
    /// reproducible boom rolls and policy tie-breaks.
    #[instrument(skip(rng))]
    pub fn with_rng(opponent: Option<Opponent>, track_stats: bool, rng: StdRng) -> Self {
        info!(?opponent, track_stats, "Creating game session");
        Self {
            game: Game::new(),
            opponent,
            stats: track_stats.then(SessionStats::new),
            move_count: 0,
            had_boom: false,
            rng,
        }
    }

    /// Returns the active game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the statistics sink, if the session tracks statistics.
    pub fn stats(&self) -> Option<&SessionStats> {
        self.stats.as_ref()
    }

    /// Applies a move for the current player and reports follow-up events.
    ///
    /// On success the move is recorded in the statistics slot (when
    /// present) and the returned events tell the presentation layer what
    /// comes next: an opponent turn, the end of the game, or a boom.
    ///
    /// # Errors
    ///
    /// Propagates the engine's [`MoveError`]; the session is unchanged.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<Vec<SessionEvent>, MoveError> {
        let player = self.game.state().current_player();
        self.game.try_move(row, col)?;
        self.move_count += 1;

        if let Some(stats) = &mut self.stats {
            stats.record_move(player, row, col, self.move_count);
        }

        let mut events = Vec::new();
        match self.game.state().status() {
            GameStatus::Won(winner) => {
                info!(%winner, "Game won");
                events.push(SessionEvent::GameOver {
                    winner: Some(winner),
                });
                if self.rng.gen_bool(BOOM_CHANCE) {
                    debug!("Boom effect triggered");
                    self.had_boom = true;
                    events.push(SessionEvent::Boom);
                }
            }
            GameStatus::Draw => {
                info!("Game drawn");
                events.push(SessionEvent::GameOver { winner: None });
            }
            GameStatus::InProgress => {
                if let Some(opponent) = self.opponent
                    && *opponent.mark() == self.game.state().current_player()
                {
                    events.push(SessionEvent::OpponentTurn);
                }
            }
        }
        Ok(events)
    }

    /// Plays the opponent's move through its policy.
    ///
    /// Does nothing when the session has no opponent slot, when it is not
    /// the opponent's turn, or when the board is full.
    ///
    /// # Errors
    ///
    /// Propagates the engine's [`MoveError`] should the policy ever
    /// produce an illegal move.
    #[instrument(skip(self))]
    pub fn opponent_move(&mut self) -> Result<Vec<SessionEvent>, MoveError> {
        let Some(opponent) = self.opponent else {
            debug!("No opponent slot; ignoring");
            return Ok(Vec::new());
        };
        if self.game.state().status() != GameStatus::InProgress
            || self.game.state().current_player() != *opponent.mark()
        {
            warn!("Opponent move requested out of turn");
            return Ok(Vec::new());
        }

        let chosen = choose_move(
            self.game.state().board(),
            *opponent.mark(),
            *opponent.difficulty(),
            &mut self.rng,
        );
        match chosen {
            Some((row, col)) => self.apply_move(row, col),
            None => Ok(Vec::new()),
        }
    }

    /// Starts a fresh game, recording the finished one first.
    ///
    /// A terminal game is forwarded to the statistics slot exactly once;
    /// restarting mid-game discards the unfinished game unrecorded, and a
    /// second restart cannot double-count because the state is already
    /// fresh. Every 5th completed game yields a
    /// [`SessionEvent::StatsReady`] for the front-end to surface.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Vec<SessionEvent> {
        let mut events = Vec::new();

        if self.game.state().status() != GameStatus::InProgress
            && let Some(stats) = &mut self.stats
        {
            stats.record_game_result(self.game.state().winner(), self.had_boom);
            if stats.games_played() % SUMMARY_INTERVAL == 0 {
                events.push(SessionEvent::StatsReady(stats.summary()));
            }
        }

        self.move_count = 0;
        self.had_boom = false;
        self.game.reset();
        debug!("Session restarted");
        events
    }
}
