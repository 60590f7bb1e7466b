//! HTTP adapter error types.

/// Errors raised while building the HTTP adapter.
///
/// Request-time failures are reported through the domain errors of the
/// [`DeviceApi`](relayboard_app::ports::DeviceApi) port instead.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The configured base URL does not parse.
    #[error("invalid device URL {url:?}: {reason}")]
    InvalidBaseUrl {
        /// The offending configuration value.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// The base URL is not an `http` or `https` URL.
    #[error("unsupported URL scheme {0:?}")]
    UnsupportedScheme(String),

    /// The reqwest client could not be built (TLS backend initialisation).
    #[error("failed to build HTTP client")]
    Client(#[from] reqwest::Error),
}
