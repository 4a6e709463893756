//! Logged-out landing shell: navigation bar, game panel, footer.

use chrono::Datelike;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::board::draw_game;
use crate::auth::AuthProvider;
use crate::tui::app::App;

/// Footer links, in display order.
const FOOTER_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Contact"];

pub(super) fn draw_logged_out<P: AuthProvider>(frame: &mut Frame, app: &App<P>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navigation
            Constraint::Min(12),   // Game
            Constraint::Length(2), // Provider notice
            Constraint::Length(4), // Footer
        ])
        .split(frame.area());

    draw_navigation(frame, chunks[0], app);

    let main = Block::default().borders(Borders::ALL);
    let inner = main.inner(chunks[1]);
    frame.render_widget(main, chunks[1]);
    draw_game(frame, inner, app.gate().game(), app.cursor());

    if let Some(notice) = app.gate().notice() {
        let notice = Paragraph::new(notice)
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(notice, chunks[2]);
    }

    draw_footer(frame, chunks[3], app.brand());
}

fn draw_navigation<P: AuthProvider>(frame: &mut Frame, area: Rect, app: &App<P>) {
    let block = Block::default().borders(Borders::BOTTOM);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(34)])
        .split(inner);

    let brand = Paragraph::new(app.brand().to_string()).style(
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(brand, cols[0]);

    let disabled = app.gate().actions_disabled();
    let buttons = Line::from(vec![
        button("Sign In (l)", disabled, app.spinner(), Style::default().fg(Color::White)),
        Span::raw("  "),
        button(
            "Sign Up (s)",
            disabled,
            app.spinner(),
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(buttons).alignment(Alignment::Right), cols[1]);
}

/// A bracketed action; shows the spinner and dims while requests are in flight.
fn button(label: &str, disabled: bool, spinner: char, style: Style) -> Span<'static> {
    if disabled {
        Span::styled(
            format!("[ {:^11} ]", spinner),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        )
    } else {
        Span::styled(format!("[ {} ]", label), style)
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, brand: &str) {
    let year = chrono::Local::now().year();
    let link_style = Style::default().fg(Color::DarkGray);

    let mut links = Vec::with_capacity(FOOTER_LINKS.len() * 2);
    for (i, link) in FOOTER_LINKS.iter().enumerate() {
        if i > 0 {
            links.push(Span::styled("  ·  ", link_style));
        }
        links.push(Span::styled(*link, link_style.add_modifier(Modifier::UNDERLINED)));
    }

    let text = vec![
        Line::from(format!("© {} {}. All rights reserved.", year, brand))
            .style(Style::default().fg(Color::Gray)),
        Line::from(links),
    ];
    let footer = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, area);
}
