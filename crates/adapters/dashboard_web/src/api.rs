//! [`DeviceApi`] implementation wrapping `gloo-net`, relative to the page
//! origin.

use gloo_net::http::Request;
use relayboard_app::ports::DeviceApi;
use relayboard_domain::error::{StatusUnavailable, ToggleFailed, TransportError};
use relayboard_domain::status::DeviceStatus;
use relayboard_domain::toggle::ToggleRequest;

const STATUS_PATH: &str = "/status";
const UPDATE_PATH: &str = "/update";

/// Fetch-based client for the device that served the page.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlooDeviceApi;

fn transport(err: gloo_net::Error) -> TransportError {
    err.to_string().into()
}

impl DeviceApi for GlooDeviceApi {
    async fn fetch_status(&self) -> Result<DeviceStatus, StatusUnavailable> {
        let resp = Request::get(STATUS_PATH)
            .send()
            .await
            .map_err(|err| StatusUnavailable::Transport(transport(err)))?;
        if resp.status() != 200 {
            return Err(StatusUnavailable::UnexpectedStatus(resp.status()));
        }
        let content_type = resp.headers().get("content-type");
        let body = resp
            .binary()
            .await
            .map_err(|err| StatusUnavailable::Transport(transport(err)))?;
        DeviceStatus::decode(content_type.as_deref(), &body)
    }

    async fn send_update(&self, request: &ToggleRequest) -> Result<(), ToggleFailed> {
        let resp = Request::post(UPDATE_PATH)
            .json(request)
            .map_err(|err| ToggleFailed::Transport(transport(err)))?
            .send()
            .await
            .map_err(|err| ToggleFailed::Transport(transport(err)))?;
        if resp.status() >= 400 {
            return Err(ToggleFailed::Rejected(resp.status()));
        }
        Ok(())
    }
}
