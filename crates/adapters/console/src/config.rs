//! Console panel configuration.

use std::collections::HashSet;

use relayboard_domain::relay::RelayId;
use serde::Deserialize;

use crate::error::ConsoleError;

/// Relay controls shown on the console, in display order.
///
/// Plays the role of the page markup: the device status never adds or
/// removes controls.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub relays: Vec<String>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            relays: ["1", "2", "3", "4"].map(String::from).to_vec(),
        }
    }
}

impl PanelConfig {
    /// Validated relay identifiers, in configuration order.
    ///
    /// # Errors
    ///
    /// - [`ConsoleError::NoRelays`] if the list is empty
    /// - [`ConsoleError::InvalidRelay`] if a name is empty
    /// - [`ConsoleError::DuplicateRelay`] if a name appears twice
    pub fn relay_ids(&self) -> Result<Vec<RelayId>, ConsoleError> {
        if self.relays.is_empty() {
            return Err(ConsoleError::NoRelays);
        }
        let mut seen = HashSet::new();
        self.relays
            .iter()
            .map(|name| {
                if !seen.insert(name.as_str()) {
                    return Err(ConsoleError::DuplicateRelay(name.clone()));
                }
                Ok(RelayId::new(name.as_str())?)
            })
            .collect()
    }
}
