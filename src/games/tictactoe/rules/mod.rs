//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here holds state, so the
//! outcome of a board can be recomputed on every read.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, check_winner};

use super::{Board, Outcome};
use tracing::instrument;

/// Computes the outcome of a board.
///
/// The first completed line in [`WINNING_LINES`] order decides the winner.
/// Without one, a full board is a draw and anything else is in progress.
#[instrument]
pub fn compute_outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Winner(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
