//! Local stand-in for a hosted identity provider.
//!
//! Counts UI ticks instead of talking to a server. At startup it reports
//! `is_loading` for `startup_ticks`; a sign-in or sign-up request stays in
//! flight for `flow_ticks` and then leaves a notice with the authorize URL
//! the user would be redirected to.

use derive_more::Display;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::provider::AuthProvider;
use crate::config::AuthSettings;

/// Kind of hand-off requested from the provider.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    /// Existing account.
    #[display("sign-in")]
    Login,
    /// New account.
    #[display("sign-up")]
    Register,
}

impl FlowKind {
    /// `prompt` parameter for the authorize endpoint.
    fn prompt(self) -> &'static str {
        match self {
            FlowKind::Login => "login",
            FlowKind::Register => "create",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingFlow {
    kind: FlowKind,
    remaining: u32,
}

/// Tick-driven identity provider.
#[derive(Debug, Clone)]
pub struct SimulatedProvider {
    settings: AuthSettings,
    startup_remaining: u32,
    flow: Option<PendingFlow>,
    notice: Option<String>,
    handoffs: u32,
    last_handoff: Option<FlowKind>,
}

impl SimulatedProvider {
    /// Creates a provider in its startup loading phase.
    #[instrument(skip(settings), fields(domain = %settings.domain()))]
    pub fn new(settings: AuthSettings) -> Self {
        info!(
            startup_ticks = *settings.startup_ticks(),
            flow_ticks = *settings.flow_ticks(),
            "Creating simulated identity provider"
        );
        Self {
            startup_remaining: *settings.startup_ticks(),
            settings,
            flow: None,
            notice: None,
            handoffs: 0,
            last_handoff: None,
        }
    }

    /// URL the user is sent to for `kind`.
    ///
    /// Query values are form-encoded, so a redirect URI carrying its own
    /// query string stays a single parameter.
    pub fn authorize_url(&self, kind: FlowKind) -> Result<String, url::ParseError> {
        let mut url = Url::parse(&format!(
            "{}/oauth2/auth",
            self.settings.domain().trim().trim_end_matches('/')
        ))?;
        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", self.settings.client_id())
            .append_pair("redirect_uri", self.settings.redirect_uri())
            .append_pair("prompt", kind.prompt());
        Ok(url.into())
    }

    /// Number of flows handed off so far.
    pub fn handoffs(&self) -> u32 {
        self.handoffs
    }

    /// Most recent flow handed off.
    pub fn last_handoff(&self) -> Option<FlowKind> {
        self.last_handoff
    }

    #[instrument(skip(self))]
    fn start(&mut self, kind: FlowKind) {
        if let Some(pending) = self.flow {
            warn!(pending = %pending.kind, "Replacing request already in flight");
        }
        info!(%kind, "Starting flow");
        self.notice = None;
        self.flow = Some(PendingFlow {
            kind,
            remaining: *self.settings.flow_ticks(),
        });
    }

    #[instrument(skip(self))]
    fn finish(&mut self, kind: FlowKind) {
        self.flow = None;
        if self.settings.domain().trim().is_empty() {
            warn!(%kind, "No identity provider domain configured");
            self.notice = Some(format!(
                "Cannot start {}: identity provider domain is not configured",
                kind
            ));
            return;
        }
        match self.authorize_url(kind) {
            Ok(url) => {
                info!(%kind, %url, "Flow handed off");
                self.notice = Some(format!("Continue {} at {}", kind, url));
                self.handoffs += 1;
                self.last_handoff = Some(kind);
            }
            Err(err) => {
                warn!(%kind, error = %err, "Invalid identity provider domain");
                self.notice = Some(format!(
                    "Cannot start {}: identity provider domain {:?} is invalid ({})",
                    kind,
                    self.settings.domain(),
                    err
                ));
            }
        }
    }
}

impl AuthProvider for SimulatedProvider {
    fn is_loading(&self) -> bool {
        self.startup_remaining > 0
    }

    fn is_login_loading(&self) -> bool {
        self.flow.is_some()
    }

    fn login(&mut self) {
        self.start(FlowKind::Login);
    }

    fn register(&mut self) {
        self.start(FlowKind::Register);
    }

    fn notice(&self) -> Option<String> {
        self.notice.clone()
    }

    fn poll(&mut self) {
        if self.startup_remaining > 0 {
            self.startup_remaining -= 1;
            if self.startup_remaining == 0 {
                debug!("Provider finished loading");
            }
            return;
        }

        if let Some(mut pending) = self.flow {
            pending.remaining = pending.remaining.saturating_sub(1);
            if pending.remaining == 0 {
                self.finish(pending.kind);
            } else {
                self.flow = Some(pending);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(extra: &str) -> AuthSettings {
        toml::from_str(&format!("startup_ticks = 0\nflow_ticks = 1\n{}", extra)).unwrap()
    }

    #[test]
    fn test_loading_ends_after_startup_ticks() {
        let mut provider = SimulatedProvider::new(AuthSettings::with_ticks(2, 1));
        assert!(provider.is_loading());
        provider.poll();
        assert!(provider.is_loading());
        provider.poll();
        assert!(!provider.is_loading());
    }

    #[test]
    fn test_flow_leaves_notice_with_prompt() {
        let mut provider = SimulatedProvider::new(AuthSettings::with_ticks(0, 2));
        provider.register();
        assert!(provider.is_login_loading());
        provider.poll();
        assert!(provider.is_login_loading());
        provider.poll();
        assert!(!provider.is_login_loading());

        let notice = provider.notice().expect("notice after hand-off");
        assert!(notice.starts_with("Continue sign-up at https://auth.example.com/oauth2/auth"));
        assert!(notice.ends_with("prompt=create"));
        assert_eq!(provider.handoffs(), 1);
        assert_eq!(provider.last_handoff(), Some(FlowKind::Register));
    }

    #[test]
    fn test_zero_flow_ticks_completes_on_next_poll() {
        let mut provider = SimulatedProvider::new(AuthSettings::with_ticks(0, 0));
        provider.login();
        assert!(provider.is_login_loading());
        provider.poll();
        assert!(!provider.is_login_loading());
        assert_eq!(provider.handoffs(), 1);
        assert_eq!(provider.last_handoff(), Some(FlowKind::Login));
    }

    #[test]
    fn test_authorize_url_encodes_query_values() {
        let provider = SimulatedProvider::new(settings(
            r#"
            client_id = "web app&admin=1"
            redirect_uri = "http://localhost:3000/cb?next=/play&x=1"
            "#,
        ));

        let url = provider.authorize_url(FlowKind::Login).unwrap();
        assert_eq!(
            url,
            "https://auth.example.com/oauth2/auth?response_type=code\
             &client_id=web+app%26admin%3D1\
             &redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fcb%3Fnext%3D%2Fplay%26x%3D1\
             &prompt=login"
        );

        let parsed = Url::parse(&url).unwrap();
        let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
        assert_eq!(pairs.len(), 4);
        assert_eq!(
            pairs[2],
            (
                "redirect_uri".to_string(),
                "http://localhost:3000/cb?next=/play&x=1".to_string()
            )
        );
    }

    #[test]
    fn test_repeated_flows_count_handoffs() {
        let mut provider = SimulatedProvider::new(AuthSettings::with_ticks(0, 1));
        provider.login();
        provider.poll();
        provider.register();
        provider.poll();
        assert_eq!(provider.handoffs(), 2);
        assert_eq!(provider.last_handoff(), Some(FlowKind::Register));
    }

    #[test]
    fn test_malformed_domain_leaves_error_notice() {
        let mut provider = SimulatedProvider::new(settings(r#"domain = "not a url""#));
        provider.login();
        provider.poll();

        let notice = provider.notice().expect("notice after failed hand-off");
        assert!(notice.starts_with("Cannot start sign-in: identity provider domain"));
        assert_eq!(provider.handoffs(), 0);
        assert_eq!(provider.last_handoff(), None);
    }
}
