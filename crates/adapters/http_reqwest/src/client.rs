//! [`DeviceApi`] implementation over `reqwest`.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode, Url};

use relayboard_app::ports::DeviceApi;
use relayboard_domain::error::{StatusUnavailable, ToggleFailed};
use relayboard_domain::status::DeviceStatus;
use relayboard_domain::toggle::ToggleRequest;

use crate::config::HttpConfig;
use crate::error::HttpError;

/// HTTP client for one device.
///
/// No timeout is configured: requests last as long as the transport allows.
#[derive(Debug, Clone)]
pub struct HttpDeviceApi {
    client: Client,
    status_url: Url,
    update_url: Url,
}

impl HttpDeviceApi {
    /// Build a client for the device at `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidBaseUrl`] or [`HttpError::UnsupportedScheme`]
    /// for a bad URL, or [`HttpError::Client`] if reqwest cannot initialise.
    pub fn new(config: &HttpConfig) -> Result<Self, HttpError> {
        let (status_url, update_url) = config.endpoints()?;
        Ok(Self {
            client: Client::builder().build()?,
            status_url,
            update_url,
        })
    }

    /// Resolved `/status` endpoint.
    #[must_use]
    pub fn status_url(&self) -> &Url {
        &self.status_url
    }

    /// Resolved `/update` endpoint.
    #[must_use]
    pub fn update_url(&self) -> &Url {
        &self.update_url
    }
}

impl DeviceApi for HttpDeviceApi {
    async fn fetch_status(&self) -> Result<DeviceStatus, StatusUnavailable> {
        tracing::trace!(url = %self.status_url, "fetching device status");
        let response = self
            .client
            .get(self.status_url.clone())
            .send()
            .await
            .map_err(|err| StatusUnavailable::Transport(Box::new(err)))?;

        if response.status() != StatusCode::OK {
            return Err(StatusUnavailable::UnexpectedStatus(
                response.status().as_u16(),
            ));
        }
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response
            .bytes()
            .await
            .map_err(|err| StatusUnavailable::Transport(Box::new(err)))?;

        DeviceStatus::decode(content_type.as_deref(), &body)
    }

    async fn send_update(&self, request: &ToggleRequest) -> Result<(), ToggleFailed> {
        tracing::trace!(url = %self.update_url, relay = %request.relay, "sending update");
        let response = self
            .client
            .post(self.update_url.clone())
            .json(request)
            .send()
            .await
            .map_err(|err| ToggleFailed::Transport(Box::new(err)))?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(ToggleFailed::Rejected(status));
        }
        Ok(())
    }
}
