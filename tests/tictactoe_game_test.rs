//! Tests for the tic-tac-toe game state machine.

use tictactoe_gate::{
    Board, GameState, Outcome, Player, Square, WINNING_LINES, compute_outcome,
};

fn play(moves: &[usize]) -> GameState {
    let mut game = GameState::new();
    for &index in moves {
        game.apply_move(index);
    }
    game
}

#[test]
fn test_every_completed_line_wins_for_its_mark() {
    for player in [Player::X, Player::O] {
        for line in WINNING_LINES {
            let mut squares = [Square::Empty; 9];
            for i in line {
                squares[i] = Square::Occupied(player);
            }
            let board = Board::from_squares(squares);
            assert_eq!(
                compute_outcome(&board),
                Outcome::Winner(player),
                "{player} on {line:?}"
            );
        }
    }
}

#[test]
fn test_first_matching_line_reported() {
    // Both the left column (X) and right column (O) are complete.
    let board: Board = "X.O X.O X.O".parse().unwrap();
    assert_eq!(compute_outcome(&board), Outcome::Winner(Player::X));

    // Top row (O) comes before the middle row (X).
    let board: Board = "OOO XXX ...".parse().unwrap();
    assert_eq!(compute_outcome(&board), Outcome::Winner(Player::O));
}

#[test]
fn test_full_board_without_line_is_draw() {
    for notation in ["XOX XOO OXX", "XXO OOX XOX", "OXO XXO XOX"] {
        let board: Board = notation.parse().unwrap();
        assert_eq!(compute_outcome(&board), Outcome::Draw, "{notation}");
    }
}

#[test]
fn test_open_board_without_line_is_in_progress() {
    for notation in ["... ... ...", "XO. ... ...", "XOX XOO OX."] {
        let board: Board = notation.parse().unwrap();
        assert_eq!(compute_outcome(&board), Outcome::InProgress, "{notation}");
    }
}

#[test]
fn test_move_on_occupied_square_changes_nothing() {
    let mut game = play(&[4]);
    let before = game.clone();

    assert!(!game.apply_move(4));
    assert_eq!(game, before);
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn test_turn_alternates_until_board_is_full() {
    let mut game = GameState::new();
    let mut expected = Player::X;
    let mut accepted = 0;

    // Fills the board without completing a line: X O X / X O O / O X X
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        assert_eq!(game.current_player(), expected);
        assert!(game.apply_move(index));
        accepted += 1;
        expected = expected.opponent();
    }

    assert_eq!(accepted, 9);
    assert!(game.board().is_full());
    assert_eq!(game.outcome(), Outcome::Draw);

    // No tenth move exists.
    for index in 0..9 {
        assert!(!game.apply_move(index));
    }
}

#[test]
fn test_diagonal_win_then_moves_ignored() {
    // X: 0, 4, 8; O: 1, 3
    let mut game = play(&[0, 1, 4, 3, 8]);
    assert_eq!(game.outcome(), Outcome::Winner(Player::X));

    let before = game.clone();
    assert!(!game.apply_move(2));
    assert_eq!(game, before);
    assert_eq!(game.board().get(2), Some(Square::Empty));
}

#[test]
fn test_centre_taken_by_o_blocks_the_diagonal() {
    // X: 0, 8, 7; O: 4, 1
    let game = play(&[0, 4, 8, 1, 7]);
    assert_eq!(game.outcome(), Outcome::InProgress);
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn test_reset_restores_initial_state() {
    for moves in [&[][..], &[0, 1][..], &[0, 1, 4, 3, 8][..]] {
        let mut game = play(moves);
        game.reset();
        assert_eq!(game, GameState::new());
        assert_eq!(game.current_player(), Player::X);
        assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
    }
}

#[test]
fn test_marks_are_never_overwritten() {
    let mut game = GameState::new();
    let mut seen = Board::new();
    for index in [4, 4, 0, 0, 8, 2, 6, 6, 1, 3, 5, 7] {
        game.apply_move(index);
        for (i, square) in seen.squares().iter().enumerate() {
            if *square != Square::Empty {
                assert_eq!(game.board().get(i), Some(*square));
            }
        }
        seen = *game.board();
    }
}

#[test]
fn test_board_notation_errors() {
    assert!("XO".parse::<Board>().is_err());
    assert!("XOXOXOXOXO".parse::<Board>().is_err());

    let err = "XOZ ... ...".parse::<Board>().unwrap_err();
    assert_eq!(err.to_string(), "Invalid square 'Z' at position 2");
}
