//! Console adapter error types.

use relayboard_domain::error::ValidationError;

/// Errors raised while setting up the console panel.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// The panel needs at least one relay control.
    #[error("no relay configured")]
    NoRelays,

    /// A configured relay name is not a valid relay identifier.
    #[error("invalid relay name")]
    InvalidRelay(#[from] ValidationError),

    /// Two controls would share the same relay.
    #[error("relay {0:?} configured twice")]
    DuplicateRelay(String),
}
