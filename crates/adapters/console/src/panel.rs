//! [`RelayPanel`] implementation drawing a single status line.

use std::cell::{Ref, RefCell};
use std::io::Write;

use relayboard_app::ports::RelayPanel;
use relayboard_domain::relay::{RelayId, RelayState};

/// Terminal panel.
///
/// Holds one control per configured relay, in display order. Each call to
/// [`present`](RelayPanel::present) writes the status line to `out`, unless it
/// is identical to the last line written.
pub struct ConsolePanel<W> {
    relays: Vec<RelayId>,
    temperature: RefCell<String>,
    states: RefCell<Vec<RelayState>>,
    last_line: RefCell<Option<String>>,
    out: RefCell<W>,
}

impl<W: Write> ConsolePanel<W> {
    /// Create a panel with every control in [`RelayState::Unknown`] and an
    /// empty temperature.
    pub fn new(relays: Vec<RelayId>, out: W) -> Self {
        let states = vec![RelayState::Unknown; relays.len()];
        Self {
            relays,
            temperature: RefCell::new(String::new()),
            states: RefCell::new(states),
            last_line: RefCell::new(None),
            out: RefCell::new(out),
        }
    }

    /// The line that the next [`present`](RelayPanel::present) would draw.
    #[must_use]
    pub fn status_line(&self) -> String {
        let states = self.states.borrow();
        let mut line = format!("temperature: {}", self.temperature.borrow());
        for (relay, state) in self.relays.iter().zip(states.iter()) {
            line.push_str(&format!(" | {relay}: {state}"));
        }
        line
    }

    /// Borrow the underlying writer.
    ///
    /// # Panics
    ///
    /// Panics if called while the panel is writing, which cannot happen from
    /// the single task that drives it.
    #[must_use]
    pub fn writer(&self) -> Ref<'_, W> {
        self.out.borrow()
    }

    fn position(&self, relay: &RelayId) -> Option<usize> {
        self.relays.iter().position(|candidate| candidate == relay)
    }
}

impl<W: Write> RelayPanel for ConsolePanel<W> {
    fn show_temperature(&self, text: &str) {
        text.clone_into(&mut self.temperature.borrow_mut());
    }

    fn relays(&self) -> Vec<RelayId> {
        self.relays.clone()
    }

    fn relay_state(&self, relay: &RelayId) -> Option<RelayState> {
        let index = self.position(relay)?;
        self.states.borrow().get(index).copied()
    }

    fn set_relay_state(&self, relay: &RelayId, state: RelayState) -> bool {
        let Some(index) = self.position(relay) else {
            return false;
        };
        self.states.borrow_mut()[index] = state;
        true
    }

    fn present(&self) {
        let line = self.status_line();
        if self.last_line.borrow().as_deref() == Some(line.as_str()) {
            return;
        }
        let mut out = self.out.borrow_mut();
        if let Err(err) = writeln!(out, "{line}").and_then(|()| out.flush()) {
            tracing::warn!(error = %err, "failed to draw status line");
            return;
        }
        *self.last_line.borrow_mut() = Some(line);
    }
}
