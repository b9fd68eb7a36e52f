//! Command-line interface for tic_tac_boom.

use clap::{Parser, Subcommand};
use tic_tac_boom::Difficulty;

/// Tic Tac Boom - tic-tac-toe where wins have a chance to go boom
#[derive(Parser, Debug)]
#[command(name = "tic_tac_boom")]
#[command(about = "Tic-tac-toe with heuristic opponents and session statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively against the computer opponent
    Play {
        /// Opponent difficulty (easy, medium, hard)
        #[arg(short, long, default_value = "medium")]
        difficulty: Difficulty,

        /// Seed for the random source (reproducible games)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run computer-vs-computer games and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "10")]
        games: u32,

        /// Difficulty playing the X marks
        #[arg(long, default_value = "hard")]
        x: Difficulty,

        /// Difficulty playing the O marks
        #[arg(long, default_value = "medium")]
        o: Difficulty,

        /// Seed for the random source (reproducible runs)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the statistics summary as JSON
        #[arg(long)]
        json: bool,
    },
}
