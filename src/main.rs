//! Tic Tac Boom - terminal front-end
//!
//! Thin presentation layer over the game core: renders the board as
//! text, reads moves from stdin, and interprets the session's events.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;
use tic_tac_boom::{
    Difficulty, GameSession, GameStatus, Opponent, Player, SessionEvent, choose_move,
};
use tracing_subscriber::EnvFilter;

/// Pacing delay before the opponent's reply. Cosmetic only.
const OPPONENT_DELAY: Duration = Duration::from_millis(500);

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { difficulty, seed } => run_play(difficulty, seed),
        Command::Simulate {
            games,
            x,
            o,
            seed,
            json,
        } => run_simulate(games, x, o, seed, json),
    }
}

/// Builds a random source, seeded when requested.
fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Interactive game against the computer opponent. Human plays X.
fn run_play(difficulty: Difficulty, seed: Option<u64>) -> Result<()> {
    let opponent = Opponent::new(Player::O, difficulty);
    let mut session = GameSession::with_rng(Some(opponent), true, make_rng(seed));

    println!("Tic Tac Boom - you are X against a {difficulty} opponent.");
    println!("Enter moves as `row col` (both 0-2), or q to quit.");

    loop {
        println!("\n{}\n", session.game().state().board().display());

        if session.game().state().status() != GameStatus::InProgress {
            match session.game().state().winner() {
                Some(winner) => println!("Player {winner} wins!"),
                None => println!("It's a draw!"),
            }
            for event in session.restart() {
                if let SessionEvent::StatsReady(summary) = event {
                    println!("\n--- Game Statistics ---\n{summary}\n");
                }
            }
            print!("Play again? (y/n) ");
            io::stdout().flush()?;
            match read_line()? {
                Some(line) if line.trim().eq_ignore_ascii_case("y") => continue,
                _ => break,
            }
        }

        println!("Player {}'s turn", session.game().state().current_player());
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = read_line()? else {
            break;
        };
        if line.trim().eq_ignore_ascii_case("q") {
            break;
        }

        let coords: Vec<usize> = line
            .split_whitespace()
            .filter_map(|token| token.parse().ok())
            .collect();
        let [row, col] = coords[..] else {
            println!("Enter two numbers 0-2, e.g. `0 2`");
            continue;
        };

        match session.apply_move(row, col) {
            Ok(events) => handle_events(&mut session, events)?,
            Err(error) => println!("{error}"),
        }
    }

    if let Some(stats) = session.stats() {
        println!("\n--- Session Statistics ---\n{}", stats.summary());
    }
    Ok(())
}

/// Interprets session events: paces the opponent's reply, renders the boom.
fn handle_events(session: &mut GameSession, events: Vec<SessionEvent>) -> Result<()> {
    for event in events {
        match event {
            SessionEvent::OpponentTurn => {
                thread::sleep(OPPONENT_DELAY);
                println!("Opponent is thinking...");
                let follow_up = session.opponent_move()?;
                handle_events(session, follow_up)?;
            }
            SessionEvent::Boom => println!("\u{1f4a5} BOOM! \u{1f4a5}"),
            // Terminal state is surfaced from the board on the next loop.
            SessionEvent::GameOver { .. } => {}
            SessionEvent::StatsReady(summary) => {
                println!("\n--- Game Statistics ---\n{summary}\n");
            }
        }
    }
    Ok(())
}

/// Plays computer-vs-computer games and prints the session summary.
fn run_simulate(
    games: u32,
    x: Difficulty,
    o: Difficulty,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    // Two sources so the X policy and the session (O policy, boom rolls)
    // draw independent streams under one seed.
    let mut x_rng = make_rng(seed);
    let session_rng = make_rng(seed.map(|s| s.wrapping_add(1)));
    let mut session = GameSession::with_rng(Some(Opponent::new(Player::O, o)), true, session_rng);

    for _ in 0..games {
        while session.game().state().status() == GameStatus::InProgress {
            if session.game().state().current_player() == Player::X {
                let chosen = choose_move(session.game().state().board(), Player::X, x, &mut x_rng);
                let Some((row, col)) = chosen else {
                    break;
                };
                session.apply_move(row, col)?;
            } else {
                session.opponent_move()?;
            }
        }
        session.restart();
    }

    let summary = session
        .stats()
        .context("session was created with statistics tracking")?
        .summary();
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }
    Ok(())
}

/// Reads one line from stdin; `None` on end of input.
fn read_line() -> Result<Option<String>> {
    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
