//! One-shot commands behind `evaluate` and `replay`.
//!
//! Each command returns the text it would print, so the binary only writes
//! the result to stdout.

use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::games::tictactoe::{
    Board, BoardParseError, GameSnapshot, GameState, Outcome, Player, Position, compute_outcome,
};

/// Failure of a one-shot command.
#[derive(Debug, Display, Error)]
pub enum CommandError {
    /// The board notation did not parse.
    #[display("Invalid board: {_0}")]
    Board(BoardParseError),
    /// A replay token named no square.
    #[display("Unknown square {token:?}")]
    UnknownSquare {
        /// The token as given.
        token: String,
    },
    /// JSON output could not be produced.
    #[display("Failed to serialize output: {_0}")]
    Json(serde_json::Error),
}

impl From<BoardParseError> for CommandError {
    fn from(err: BoardParseError) -> Self {
        Self::Board(err)
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Outcome of a board given in text notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Board in nine-character notation.
    pub board: String,
    /// Derived outcome.
    pub outcome: Outcome,
    /// Winning player, if any.
    pub winner: Option<Player>,
    /// Human-readable outcome.
    pub status: String,
}

/// A fresh game after a sequence of moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    /// Final game state.
    pub game: GameState,
    /// Indices of moves the game ignored, in the order given.
    pub skipped: Vec<usize>,
}

#[derive(Serialize)]
struct ReplayOutput<'a> {
    #[serde(flatten)]
    snapshot: GameSnapshot,
    skipped: &'a [usize],
}

/// Parses `notation` and derives its outcome.
#[instrument]
pub fn evaluate_board(notation: &str) -> Result<Evaluation, CommandError> {
    let board: Board = notation.parse()?;
    Ok(evaluation_of(&board))
}

/// Renders [`evaluate_board`] as text, or as pretty JSON when `json` is set.
#[instrument]
pub fn evaluate(notation: &str, json: bool) -> Result<String, CommandError> {
    let board: Board = notation.parse()?;
    let evaluation = evaluation_of(&board);
    if json {
        return Ok(serde_json::to_string_pretty(&evaluation)?);
    }
    Ok(format!("{}\n\n{}", board.display(), evaluation.status))
}

fn evaluation_of(board: &Board) -> Evaluation {
    let outcome = compute_outcome(board);
    info!(%outcome, "Board evaluated");
    Evaluation {
        board: board.notation(),
        outcome,
        winner: outcome.winner(),
        status: outcome.to_string(),
    }
}

/// Plays `tokens` on an empty board.
///
/// Tokens are indices (`0`-`8`) or labels such as `center`. Every token is
/// resolved before any move is made, so one unknown token fails the whole
/// replay. Moves the game ignores (occupied square, game already decided)
/// are recorded in [`Replay::skipped`] and the rest still apply.
#[instrument(skip(tokens), fields(moves = tokens.len()))]
pub fn replay_game<S: AsRef<str>>(tokens: &[S]) -> Result<Replay, CommandError> {
    let positions = tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            Position::from_label_or_number(token).ok_or_else(|| CommandError::UnknownSquare {
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut game = GameState::new();
    let mut skipped = Vec::new();
    for pos in positions {
        if !game.apply_move(pos.to_index()) {
            warn!(position = %pos, "Move ignored");
            skipped.push(pos.to_index());
        }
    }

    info!(outcome = %game.outcome(), skipped = skipped.len(), "Replay finished");
    Ok(Replay { game, skipped })
}

/// Renders [`replay_game`] as text, or as pretty JSON when `json` is set.
pub fn replay<S: AsRef<str>>(tokens: &[S], json: bool) -> Result<String, CommandError> {
    let Replay { game, skipped } = replay_game(tokens)?;
    if json {
        let output = ReplayOutput {
            snapshot: game.snapshot(),
            skipped: &skipped,
        };
        return Ok(serde_json::to_string_pretty(&output)?);
    }
    Ok(format!("{}\n\n{}", game.board().display(), game.status_message()))
}
