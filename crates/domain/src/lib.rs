//! # relayboard-domain
//!
//! Pure domain model for the relayboard status client.
//!
//! ## Responsibilities
//! - Identify relays ([`relay::RelayId`]) and their on-screen state ([`relay::RelayState`])
//! - Decode and validate **device status** snapshots reported by `/status`
//! - Build **toggle requests** sent to `/update`
//! - Format temperatures for display
//! - Define the typed error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod relay;
pub mod status;
pub mod temperature;
pub mod toggle;
