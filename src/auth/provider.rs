//! Capability interface for an external identity provider.

/// What the gate needs from an identity provider.
///
/// `login` and `register` hand off to the provider's own flow (typically a
/// browser redirect). Their completion is observed only through the loading
/// flags; the gate never waits on them and never retries.
pub trait AuthProvider {
    /// The provider is still establishing session state.
    fn is_loading(&self) -> bool;

    /// A sign-in or sign-up request is in flight.
    fn is_login_loading(&self) -> bool;

    /// Starts the sign-in flow.
    fn login(&mut self);

    /// Starts the sign-up flow.
    fn register(&mut self);

    /// Message the provider wants shown, e.g. a redirect target or a failure.
    ///
    /// Displayed verbatim.
    fn notice(&self) -> Option<String> {
        None
    }

    /// Called once per UI tick so the provider can observe in-flight flows.
    fn poll(&mut self) {}
}

impl<P: AuthProvider + ?Sized> AuthProvider for Box<P> {
    fn is_loading(&self) -> bool {
        (**self).is_loading()
    }

    fn is_login_loading(&self) -> bool {
        (**self).is_login_loading()
    }

    fn login(&mut self) {
        (**self).login()
    }

    fn register(&mut self) {
        (**self).register()
    }

    fn notice(&self) -> Option<String> {
        (**self).notice()
    }

    fn poll(&mut self) {
        (**self).poll()
    }
}
