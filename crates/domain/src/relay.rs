//! Relays — binary outputs of the device, identified by an opaque string key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Identifier of a relay.
///
/// Matches the key used by the device in `/status` and `/update` payloads and
/// the key carried by the relay's control on the UI surface (the
/// `data-number` attribute in the browser page).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RelayId(String);

impl RelayId {
    /// Build an identifier, rejecting empty keys.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyRelayId`] when `value` is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::EmptyRelayId);
        }
        Ok(Self(value))
    }

    /// Borrow the raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RelayId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RelayId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RelayId> for String {
    fn from(id: RelayId) -> Self {
        id.0
    }
}

/// Visual state of a relay control.
///
/// The two known states are mutually exclusive; [`Unknown`](Self::Unknown)
/// means the control shows neither (nothing reported yet, or status lost).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelayState {
    On,
    Off,
    #[default]
    Unknown,
}

impl RelayState {
    /// Map a reported boolean onto a visual state.
    #[must_use]
    pub fn from_reported(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }

    /// Whether the control currently shows "on".
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// State requested by a click: anything not shown as on turns on.
    #[must_use]
    pub fn toggled(self) -> Self {
        Self::from_reported(!self.is_on())
    }

    /// CSS class marking this state on a page control, if any.
    #[must_use]
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Self::On => Some("state-true"),
            Self::Off => Some("state-false"),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for RelayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
            Self::Unknown => f.write_str("-"),
        }
    }
}
