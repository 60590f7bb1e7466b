//! Common error types used across the workspace.
//!
//! Each failure the status client can observe has its own typed error.
//! Adapters wrap their transport errors as boxed sources so that no
//! framework type leaks into the domain.

/// Boxed transport-level error coming from an adapter (HTTP client, browser fetch, …).
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// A domain invariant was violated while building a value.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Relay identifiers must not be empty.
    #[error("relay identifier must not be empty")]
    EmptyRelayId,
}

/// The device status could not be obtained or understood.
///
/// Always recovered locally by rendering the error state; never surfaced to
/// the user as a notification.
#[derive(Debug, thiserror::Error)]
pub enum StatusUnavailable {
    /// The request never produced an HTTP response.
    #[error("device unreachable")]
    Transport(#[source] TransportError),

    /// The device answered with something other than `200 OK`.
    #[error("device answered with HTTP {0}")]
    UnexpectedStatus(u16),

    /// The response body is not JSON.
    #[error("unsupported content type {0:?}")]
    UnsupportedContentType(Option<String>),

    /// The body is JSON but does not match the status schema.
    #[error("malformed status payload")]
    Malformed(#[source] serde_json::Error),
}

/// A toggle request did not succeed.
#[derive(Debug, thiserror::Error)]
pub enum ToggleFailed {
    /// The request never produced an HTTP response.
    #[error("device unreachable")]
    Transport(#[source] TransportError),

    /// The device answered with a status code of 400 or above.
    #[error("device rejected update with HTTP {0}")]
    Rejected(u16),
}

impl ToggleFailed {
    /// Whether the device answered at all, in which case the displayed state
    /// gets reconciled with a fresh status fetch.
    #[must_use]
    pub fn reconciles(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}
