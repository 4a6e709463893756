//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};
use tracing::instrument;

/// The eight lines that end the game when uniformly marked.
///
/// Rows, then columns, then diagonals. Scan order decides which winner is
/// reported for a board holding more than one completed line.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first completed line in [`WINNING_LINES`]
/// order, `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a)?;
        match sq {
            Square::Occupied(player) if board.get(b) == Some(sq) && board.get(c) == Some(sq) => {
                Some(player)
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().expect("valid board notation")
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in WINNING_LINES {
            let mut squares = [Square::Empty; 9];
            for i in line {
                squares[i] = Square::Occupied(Player::O);
            }
            let board = Board::from_squares(squares);
            assert_eq!(check_winner(&board), Some(Player::O), "line {line:?}");
        }
    }

    #[test]
    fn test_winner_diagonal() {
        assert_eq!(check_winner(&board("X.. .X. ..X")), Some(Player::X));
        assert_eq!(check_winner(&board("..O .O. O..")), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(check_winner(&board("XX. ... ...")), None);
        assert_eq!(check_winner(&board("XXO ... ...")), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Top row (O) precedes the bottom row (X) in scan order.
        assert_eq!(check_winner(&board("OOO ... XXX")), Some(Player::O));

        // Middle row (X) precedes the bottom row (O).
        assert_eq!(check_winner(&board("... XXX OOO")), Some(Player::X));

        // Left column (X) precedes the middle column (O).
        assert_eq!(check_winner(&board("XO. XO. XO.")), Some(Player::X));
    }
}
