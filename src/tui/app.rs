//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, instrument};

use super::input::move_cursor;
use crate::auth::{AuthGate, AuthProvider, GateView};
use crate::games::tictactoe::Position;

/// Spinner frames, advanced once per tick.
const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App<P> {
    gate: AuthGate<P>,
    cursor: Position,
    brand: String,
    ticks: u64,
}

impl<P: AuthProvider> App<P> {
    /// Creates an application around `gate`.
    pub fn new(gate: AuthGate<P>, brand: impl Into<String>) -> Self {
        Self {
            gate,
            cursor: Position::Center,
            brand: brand.into(),
            ticks: 0,
        }
    }

    /// The auth gate and embedded game.
    pub fn gate(&self) -> &AuthGate<P> {
        &self.gate
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Brand shown in the navigation bar and footer.
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Current spinner frame.
    pub fn spinner(&self) -> char {
        SPINNER[(self.ticks % SPINNER.len() as u64) as usize]
    }

    /// Advances one UI tick and lets the provider make progress.
    pub fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
        self.gate.poll();
    }

    /// Handles one key press to completion.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
            info!("User quit");
            return Flow::Quit;
        }

        if self.gate.view() == GateView::Loading {
            debug!("Ignoring key while provider is loading");
            return Flow::Continue;
        }

        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.gate.apply_move(self.cursor.to_index());
            }
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = c
                    .to_digit(10)
                    .and_then(|d| Position::from_index(d as usize - 1))
                {
                    self.cursor = pos;
                    self.gate.apply_move(pos.to_index());
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.gate.reset(),
            KeyCode::Char('l') | KeyCode::Char('L') => {
                self.gate.login();
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.gate.register();
            }
            _ => {}
        }
        Flow::Continue
    }
}
