//! Panel port — the UI surface showing the temperature and relay controls.

use relayboard_domain::relay::{RelayId, RelayState};

/// The UI surface.
///
/// The set of relay controls belongs to the surface (page markup, configured
/// relay list) and never changes at runtime. Methods take `&self`; adapters
/// use interior mutability.
pub trait RelayPanel {
    /// Replace the temperature text.
    fn show_temperature(&self, text: &str);

    /// Every relay that has a control on the surface.
    fn relays(&self) -> Vec<RelayId>;

    /// Current visual state of a relay's control, or `None` if the relay has
    /// no control.
    fn relay_state(&self, relay: &RelayId) -> Option<RelayState>;

    /// Set a relay's control to `state`.
    ///
    /// Returns `false` when the relay has no control.
    fn set_relay_state(&self, relay: &RelayId, state: RelayState) -> bool;

    /// Called once after a batch of changes. Surfaces that redraw as a whole
    /// flush here; the default does nothing.
    fn present(&self) {}
}
