//! Tests for the authentication gate.

use tictactoe_gate::{AuthGate, AuthProvider, GateView, Outcome, Player};

/// Provider whose flags are set directly by the test.
#[derive(Debug, Default)]
struct ScriptedProvider {
    loading: bool,
    login_loading: bool,
    logins: usize,
    registrations: usize,
}

impl AuthProvider for ScriptedProvider {
    fn is_loading(&self) -> bool {
        self.loading
    }

    fn is_login_loading(&self) -> bool {
        self.login_loading
    }

    fn login(&mut self) {
        self.logins += 1;
    }

    fn register(&mut self) {
        self.registrations += 1;
    }

    fn notice(&self) -> Option<String> {
        self.login_loading.then(|| "Redirecting...".to_string())
    }
}

#[test]
fn test_loading_provider_shows_loading_view() {
    let gate = AuthGate::new(ScriptedProvider {
        loading: true,
        ..Default::default()
    });
    assert_eq!(gate.view(), GateView::Loading);
}

#[test]
fn test_ready_provider_shows_logged_out_shell() {
    let gate = AuthGate::new(ScriptedProvider::default());
    assert_eq!(gate.view(), GateView::LoggedOut);
    assert_eq!(gate.game().outcome(), Outcome::InProgress);
}

#[test]
fn test_login_and_register_delegate_when_idle() {
    let mut gate = AuthGate::new(ScriptedProvider::default());
    assert!(gate.login());
    assert!(gate.register());
    assert_eq!(gate.provider().logins, 1);
    assert_eq!(gate.provider().registrations, 1);
}

#[test]
fn test_actions_not_delegated_while_login_loading() {
    let mut gate = AuthGate::new(ScriptedProvider {
        login_loading: true,
        ..Default::default()
    });
    assert!(gate.actions_disabled());
    assert!(!gate.login());
    assert!(!gate.register());
    assert_eq!(gate.provider().logins, 0);
    assert_eq!(gate.provider().registrations, 0);
}

#[test]
fn test_notice_passes_through_verbatim() {
    let gate = AuthGate::new(ScriptedProvider {
        login_loading: true,
        ..Default::default()
    });
    assert_eq!(gate.notice().as_deref(), Some("Redirecting..."));
}

#[test]
fn test_game_input_ignored_while_loading() {
    let mut gate = AuthGate::new(ScriptedProvider {
        loading: true,
        ..Default::default()
    });
    assert!(!gate.apply_move(4));
    assert!(gate.game().board().is_empty(4));
}

#[test]
fn test_game_playable_in_logged_out_shell() {
    let mut gate = AuthGate::new(ScriptedProvider::default());
    for index in [0, 3, 1, 4, 2] {
        assert!(gate.apply_move(index));
    }
    assert_eq!(gate.game().outcome(), Outcome::Winner(Player::X));

    gate.reset();
    assert_eq!(gate.game().outcome(), Outcome::InProgress);
    assert_eq!(gate.game().current_player(), Player::X);
}

#[test]
fn test_boxed_provider_is_a_provider() {
    let provider: Box<dyn AuthProvider> = Box::new(ScriptedProvider::default());
    let mut gate = AuthGate::new(provider);
    assert_eq!(gate.view(), GateView::LoggedOut);
    assert!(gate.login());
}
