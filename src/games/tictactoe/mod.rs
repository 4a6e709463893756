mod game;
mod position;
mod rules;
mod types;

pub use game::{GameSnapshot, GameState};
pub use position::Position;
pub use rules::{WINNING_LINES, check_winner, compute_outcome, is_full};
pub use types::{BOARD_SIZE, Board, BoardParseError, Outcome, Player, Square};
