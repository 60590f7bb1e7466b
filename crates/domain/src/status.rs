//! Device status — a snapshot of temperature and relay states.
//!
//! A [`DeviceStatus`] only ever comes out of [`DeviceStatus::decode`], which
//! checks the content type and validates the payload shape before any value
//! reaches the renderer.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::StatusUnavailable;
use crate::relay::RelayId;

/// Media type the device uses for status payloads.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Snapshot reported by the device.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceStatus {
    /// Temperature in degrees Celsius, if the device reported one.
    pub temperature: Option<f64>,
    /// Reported on/off state per relay.
    pub states: BTreeMap<RelayId, bool>,
}

/// Wire shape of the `/status` body before validation.
#[derive(Deserialize)]
struct RawStatus {
    #[serde(default)]
    temperature: Option<f64>,
    #[serde(default)]
    states: Option<BTreeMap<String, bool>>,
}

impl DeviceStatus {
    /// Decode a `/status` response body.
    ///
    /// `content_type` is the raw `Content-Type` header value; only
    /// `application/json`, optionally followed by parameters, is accepted.
    ///
    /// # Errors
    ///
    /// - [`StatusUnavailable::UnsupportedContentType`] for any other media type
    /// - [`StatusUnavailable::Malformed`] if the body does not match the schema
    ///
    /// Entries with an empty relay key are dropped: no control can carry them.
    pub fn decode(content_type: Option<&str>, body: &[u8]) -> Result<Self, StatusUnavailable> {
        if !content_type.is_some_and(is_json) {
            return Err(StatusUnavailable::UnsupportedContentType(
                content_type.map(str::to_owned),
            ));
        }
        let raw: RawStatus = serde_json::from_slice(body).map_err(StatusUnavailable::Malformed)?;
        let states = raw
            .states
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(relay, on)| RelayId::new(relay).ok().map(|id| (id, on)))
            .collect();
        Ok(Self {
            temperature: raw.temperature,
            states,
        })
    }

    /// Reported state of a single relay.
    #[must_use]
    pub fn relay(&self, relay: &RelayId) -> Option<bool> {
        self.states.get(relay).copied()
    }
}

fn is_json(content_type: &str) -> bool {
    content_type
        .strip_prefix(JSON_MEDIA_TYPE)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(';'))
}
