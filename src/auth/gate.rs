//! The gate: loading indicator or logged-out shell with the embedded game.

use tracing::{debug, info, instrument};

use super::provider::AuthProvider;
use crate::games::tictactoe::GameState;

/// Which presentation the gate shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateView {
    /// The provider is still loading; show a spinner.
    Loading,
    /// Landing shell with sign-in/sign-up actions and the game.
    LoggedOut,
}

/// Owns the identity provider and the embedded game.
#[derive(Debug)]
pub struct AuthGate<P> {
    provider: P,
    game: GameState,
}

impl<P: AuthProvider> AuthGate<P> {
    /// Creates a gate around `provider` with a fresh game.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            game: GameState::new(),
        }
    }

    /// Current presentation, derived from the provider on every call.
    pub fn view(&self) -> GateView {
        if self.provider.is_loading() {
            GateView::Loading
        } else {
            GateView::LoggedOut
        }
    }

    /// Whether sign-in and sign-up actions are currently disabled.
    pub fn actions_disabled(&self) -> bool {
        self.provider.is_login_loading()
    }

    /// Delegates sign-in to the provider unless a request is in flight.
    ///
    /// Returns whether the provider was called.
    #[instrument(skip(self))]
    pub fn login(&mut self) -> bool {
        if self.actions_disabled() {
            debug!("Ignoring sign-in: request already in flight");
            return false;
        }
        info!("Delegating sign-in to provider");
        self.provider.login();
        true
    }

    /// Delegates sign-up to the provider unless a request is in flight.
    ///
    /// Returns whether the provider was called.
    #[instrument(skip(self))]
    pub fn register(&mut self) -> bool {
        if self.actions_disabled() {
            debug!("Ignoring sign-up: request already in flight");
            return false;
        }
        info!("Delegating sign-up to provider");
        self.provider.register();
        true
    }

    /// Plays `index` on the embedded game when the shell is showing.
    ///
    /// Same silent no-op contract as [`GameState::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> bool {
        if self.view() != GateView::LoggedOut {
            debug!("Ignoring move while provider is loading");
            return false;
        }
        self.game.apply_move(index)
    }

    /// Starts a new game when the shell is showing.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        if self.view() != GateView::LoggedOut {
            debug!("Ignoring reset while provider is loading");
            return;
        }
        self.game.reset();
    }

    /// Gives the provider its per-tick chance to make progress.
    pub fn poll(&mut self) {
        self.provider.poll();
    }

    /// Provider notice, passed through untouched.
    pub fn notice(&self) -> Option<String> {
        self.provider.notice()
    }

    /// The embedded game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// The identity provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }
}
