//! Device endpoint configuration.

use reqwest::Url;
use serde::Deserialize;

use crate::error::HttpError;

/// Where the device's HTTP API lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Scheme, host and port of the device (e.g. `http://192.168.1.20`).
    ///
    /// `/status` and `/update` are resolved from the root of this URL; any
    /// path component is ignored.
    pub base_url: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
        }
    }
}

impl HttpConfig {
    /// Parse [`base_url`](Self::base_url) and resolve the `/status` and
    /// `/update` endpoints from its root.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidBaseUrl`] if the URL does not parse, or
    /// [`HttpError::UnsupportedScheme`] if it is not `http` or `https`.
    pub fn endpoints(&self) -> Result<(Url, Url), HttpError> {
        let invalid = |reason: String| HttpError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };
        let base = Url::parse(&self.base_url).map_err(|err| invalid(err.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(HttpError::UnsupportedScheme(base.scheme().to_string()));
        }
        Ok((
            base.join("/status")
                .map_err(|err| invalid(err.to_string()))?,
            base.join("/update")
                .map_err(|err| invalid(err.to_string()))?,
        ))
    }
}
