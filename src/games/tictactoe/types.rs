//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 9;

/// Player in the game.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Single-character notation used by [`Board`]'s text form.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board, squares in row-major order (0-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from explicit squares.
    ///
    /// No legality checks are made; the result may hold more than one
    /// completed line or an impossible mark count.
    pub fn from_squares(squares: [Square; BOARD_SIZE]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given index, or `None` past the last square.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if the square at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Checks whether every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; BOARD_SIZE] {
        &self.squares
    }

    /// Returns a copy of the board with `index` marked for `player`.
    ///
    /// Callers are responsible for legality; the game state only calls this
    /// for empty, in-range squares.
    pub(crate) fn with_mark(mut self, index: usize, player: Player) -> Self {
        self.squares[index] = Square::Occupied(player);
        self
    }

    /// Formats the board as a human-readable grid, numbering empty squares 1-9.
    #[instrument(skip(self))]
    pub fn display(&self) -> String {
        self.squares
            .chunks(3)
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, square)| match square.player() {
                        Some(player) => player.to_string(),
                        None => (row * 3 + col + 1).to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n-+-+-\n")
    }

    /// Compact nine-character notation, e.g. `XO.X.O..X`.
    pub fn notation(&self) -> String {
        self.squares.iter().map(|s| s.symbol()).collect()
    }
}

/// Error parsing a board from its text notation.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// A character other than a mark, an empty marker or a separator.
    #[display("Invalid square {found:?} at position {index}")]
    InvalidSquare {
        /// The offending character.
        found: char,
        /// Square index the character would have filled.
        index: usize,
    },
    /// The notation did not describe exactly nine squares.
    #[display("Expected 9 squares, found {found}")]
    WrongLength {
        /// Number of squares read.
        found: usize,
    },
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses `X`, `O` and `.`/`-`/`_` squares; whitespace and `|` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; BOARD_SIZE];
        let mut count = 0;

        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '-' | '_' => Square::Empty,
                found => {
                    return Err(BoardParseError::InvalidSquare {
                        found,
                        index: count,
                    });
                }
            };
            if count < BOARD_SIZE {
                squares[count] = square;
            }
            count += 1;
        }

        if count != BOARD_SIZE {
            return Err(BoardParseError::WrongLength { found: count });
        }
        Ok(Self { squares })
    }
}

/// Derived end-state of a game.
///
/// Never stored: always recomputed from a [`Board`].
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and at least one empty square.
    #[display("In progress")]
    InProgress,
    /// A player completed a line.
    #[display("{_0} wins!")]
    Winner(Player),
    /// Board full with no completed line.
    #[display("It's a draw!")]
    Draw,
}

impl Outcome {
    /// Returns the winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(player),
            _ => None,
        }
    }

    /// Whether the game has ended.
    pub fn is_decided(self) -> bool {
        self != Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::InProgress.to_string(), "In progress");
        assert_eq!(Outcome::Winner(Player::O).to_string(), "O wins!");
        assert_eq!(Outcome::Draw.to_string(), "It's a draw!");
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::Winner(Player::X).winner(), Some(Player::X));
        assert_eq!(Outcome::Draw.winner(), None);
        assert_eq!(Outcome::InProgress.winner(), None);
    }
}
