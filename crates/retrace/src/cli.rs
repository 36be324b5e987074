//! Command-line interface for retrace.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Retrace - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "retrace")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./retrace.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Start with the move list newest-first
        #[arg(long)]
        descending: bool,

        /// Disable mouse capture
        #[arg(long)]
        no_mouse: bool,
    },

    /// Apply moves without a UI and print the resulting game
    Replay {
        /// Cell indices (0-8, row-major) to play in order, comma-separated
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// History step to jump to after the moves
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print the game state as JSON
        #[arg(long)]
        json: bool,

        /// List moves newest-first
        #[arg(long)]
        descending: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            descending: false,
            no_mouse: false,
        }
    }
}
