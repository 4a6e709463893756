//! Turn-based game state for tic-tac-toe.
//!
//! [`GameState`] holds exactly two pieces of state: the board and the player
//! to move. The outcome is never stored; every read recomputes it from the
//! board with [`compute_outcome`].
//!
//! # Illegal moves
//!
//! [`GameState::apply_move`] silently ignores a move on an occupied square,
//! an out-of-range index, or any move once the game is decided. This mirrors
//! a click on a dead square having no effect. It is part of the contract and
//! not an error path: the return value only reports whether the move landed.

use derive_new::new;
use serde::Serialize;
use tracing::{debug, info, instrument};

use super::rules::compute_outcome;
use super::types::{Board, Outcome, Player};

/// Board plus the player to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    to_move: Player,
}

impl GameState {
    /// Creates a game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next accepted move places.
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    /// Derived outcome of the current board.
    #[instrument(skip(self))]
    pub fn outcome(&self) -> Outcome {
        compute_outcome(&self.board)
    }

    /// Whether moves are still accepted.
    pub fn is_active(&self) -> bool {
        !self.outcome().is_decided()
    }

    /// Places the current player's mark at `index` and passes the turn.
    ///
    /// A no-op when the square is occupied, `index` is past 8, or the game is
    /// decided. Returns `true` only when the move was applied.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, index: usize) -> bool {
        if !self.is_active() {
            debug!(index, "Ignoring move: game is over");
            return false;
        }
        if !self.board.is_empty(index) {
            debug!(index, "Ignoring move: square occupied or out of range");
            return false;
        }

        self.board = self.board.with_mark(index, self.to_move);
        self.to_move = self.to_move.opponent();
        debug!(index, next = %self.to_move, "Move applied");
        true
    }

    /// Restores the empty board with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        *self = Self::new();
    }

    /// Status line shown under the board.
    pub fn status_message(&self) -> String {
        match self.outcome() {
            Outcome::InProgress => format!("{}'s turn", self.to_move),
            decided => decided.to_string(),
        }
    }

    /// Serializable view of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::new(
            self.board.notation(),
            self.is_active().then_some(self.to_move),
            self.outcome(),
            self.status_message(),
        )
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time view of a game, for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct GameSnapshot {
    /// Board in nine-character notation.
    pub board: String,
    /// Player to move, absent once the game is decided.
    pub to_move: Option<Player>,
    /// Derived outcome.
    pub outcome: Outcome,
    /// Human-readable status line.
    pub status: String,
}
