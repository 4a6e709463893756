//! Stateless rendering for the gate and the game.

mod board;
mod shell;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use super::app::App;
use crate::auth::{AuthProvider, GateView};

/// Renders whichever view the gate selects.
pub fn draw<P: AuthProvider>(frame: &mut Frame, app: &App<P>) {
    match app.gate().view() {
        GateView::Loading => draw_loading(frame, app.spinner()),
        GateView::LoggedOut => shell::draw_logged_out(frame, app),
    }
}

fn draw_loading(frame: &mut Frame, spinner: char) {
    let area = center_rect(frame.area(), 30, 3);
    let text = vec![
        Line::from(spinner.to_string()).style(
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("Authenticating...").style(Style::default().fg(Color::Gray)),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

/// Centers a `width` x `height` rectangle in `area`, clamped to its size.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
