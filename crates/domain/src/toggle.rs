//! Toggle request — the `/update` payload for a single relay.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::relay::RelayId;

/// Desired state for exactly one relay.
///
/// Serializes as a single-key JSON object: `{"<relay>": <state>}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleRequest {
    pub relay: RelayId,
    pub state: bool,
}

impl ToggleRequest {
    #[must_use]
    pub fn new(relay: RelayId, state: bool) -> Self {
        Self { relay, state }
    }
}

impl Serialize for ToggleRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.relay.as_str(), &self.state)?;
        map.end()
    }
}
