//! Authentication gate in front of the game.
//!
//! The game core knows nothing about identity. [`AuthGate`] talks to any
//! [`AuthProvider`] through four capabilities (`is_loading`,
//! `is_login_loading`, `login`, `register`) and decides what to show.

mod gate;
mod provider;
mod simulated;

pub use gate::{AuthGate, GateView};
pub use provider::AuthProvider;
pub use simulated::{FlowKind, SimulatedProvider};
