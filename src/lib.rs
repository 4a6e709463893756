//! Tic-tac-toe in a terminal landing page gated by an identity provider.
//!
//! # Architecture
//!
//! - **Games**: the tic-tac-toe state machine. Board and turn are the only
//!   state; the outcome is recomputed from the board on every read.
//! - **Auth**: [`AuthGate`] asks an [`AuthProvider`] whether it is loading
//!   and shows either a spinner or the logged-out shell with the game.
//! - **TUI**: ratatui rendering and key handling for the gate.
//! - **Config**: TOML settings with environment overrides.
//! - **Commands**: `evaluate` and `replay`, rendered to text or JSON.
//!
//! # Example
//!
//! ```
//! use tictactoe_gate::{GameState, Outcome, Player};
//!
//! let mut game = GameState::new();
//! for index in [0, 1, 4, 3, 8] {
//!     game.apply_move(index);
//! }
//! assert_eq!(game.outcome(), Outcome::Winner(Player::X));
//!
//! // Moves after the game is decided are ignored.
//! assert!(!game.apply_move(2));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod auth;
mod commands;
mod config;
mod games;
mod tui;

// Crate-level exports - Configuration
pub use config::{
    AppConfig, AuthSettings, ConfigError, DEFAULT_LOG_FILTER, ENV_AUTH_CLIENT_ID,
    ENV_AUTH_DOMAIN, ENV_AUTH_REDIRECT_URI,
};

// Crate-level exports - One-shot commands
pub use commands::{
    CommandError, Evaluation, Replay, evaluate, evaluate_board, replay, replay_game,
};

// Crate-level exports - Authentication gate
pub use auth::{AuthGate, AuthProvider, FlowKind, GateView, SimulatedProvider};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_SIZE, Board, BoardParseError, GameSnapshot, GameState, Outcome, Player, Position,
    Square, WINNING_LINES, check_winner, compute_outcome, is_full,
};

// Crate-level exports - Terminal UI
pub use tui::{App, Flow, draw, move_cursor, run_app, run_tui};
