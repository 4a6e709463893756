//! The game panel: title, grid, status and new-game hint.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::center_rect;
use crate::games::tictactoe::{GameState, Outcome, Player, Position, Square};

/// Width of one rendered square.
const CELL_WIDTH: usize = 5;

/// Renders the game panel into `area`.
pub(super) fn draw_game(frame: &mut Frame, area: Rect, game: &GameState, cursor: Position) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(5),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // New game
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let grid = Paragraph::new(grid_lines(game, cursor)).alignment(Alignment::Center);
    frame.render_widget(grid, center_rect(chunks[1], 17, 5));

    let status_style = match game.outcome() {
        Outcome::InProgress => Style::default().fg(Color::White),
        Outcome::Winner(_) => Style::default().fg(Color::Green),
        Outcome::Draw => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(game.status_message())
        .style(status_style.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let hint = if game.is_active() {
        "arrows/1-9: play | r: New Game"
    } else {
        "r: New Game"
    };
    let hint = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[3]);
}

/// Three rows of squares separated by rule lines.
fn grid_lines(game: &GameState, cursor: Position) -> Vec<Line<'static>> {
    let separator = vec!["─".repeat(CELL_WIDTH); 3].join("┼");
    let active = game.is_active();

    let mut lines = Vec::with_capacity(5);
    for row in 0..3 {
        if row > 0 {
            lines.push(Line::from(separator.clone()).style(Style::default().fg(Color::DarkGray)));
        }
        let mut spans = Vec::with_capacity(5);
        for col in 0..3 {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            let index = row * 3 + col;
            let square = game.board().get(index).unwrap_or_default();
            spans.push(cell_span(square, index, active && cursor.to_index() == index));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn cell_span(square: Square, index: usize, highlighted: bool) -> Span<'static> {
    let (symbol, style) = match square {
        Square::Empty => (
            (index + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if highlighted {
        style.bg(Color::White).fg(Color::Black)
    } else {
        style
    };
    Span::styled(format!("{:^width$}", symbol, width = CELL_WIDTH), style)
}
