//! Device API port — the device's HTTP endpoints.

use std::future::Future;

use relayboard_domain::error::{StatusUnavailable, ToggleFailed};
use relayboard_domain::status::DeviceStatus;
use relayboard_domain::toggle::ToggleRequest;

/// Access to the device's `/status` and `/update` endpoints.
///
/// Implementations live in adapter crates (`reqwest` natively, `gloo-net` in
/// the browser). The returned futures are not required to be `Send`.
pub trait DeviceApi {
    /// `GET /status`, decoded through [`DeviceStatus::decode`].
    ///
    /// Anything but a `200 OK` carrying a valid JSON status is an error.
    fn fetch_status(&self) -> impl Future<Output = Result<DeviceStatus, StatusUnavailable>>;

    /// `POST /update` with `request` as a JSON body.
    ///
    /// A response with status 400 or above maps to
    /// [`ToggleFailed::Rejected`]; the response body is ignored.
    fn send_update(
        &self,
        request: &ToggleRequest,
    ) -> impl Future<Output = Result<(), ToggleFailed>>;
}
