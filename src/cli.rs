//! Command-line interface for tictactoe_gate.

use clap::{Parser, Subcommand};

/// Tic-tac-toe behind an identity-provider landing page
#[derive(Parser, Debug)]
#[command(name = "tictactoe_gate")]
#[command(about = "Play tic-tac-toe in a gated terminal landing page", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the terminal UI
    Play {
        /// Path to the TOML config file (defaults apply if it doesn't exist)
        #[arg(short, long, default_value = "tictactoe_gate.toml")]
        config: std::path::PathBuf,
    },

    /// Print the outcome of a board, e.g. "XO. .X. ..X"
    Evaluate {
        /// Nine squares of X, O or '.', separators and whitespace ignored
        board: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Play moves from an empty board and print the result
    Replay {
        /// Squares as indices (0-8) or labels (center, top-left, ...)
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
