//! # relayboard-app
//!
//! Application layer — the status client use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `DeviceApi` — fetch `/status`, send `/update`
//!   - `RelayPanel` — the UI surface showing temperature and relay controls
//!   - `Notifier` — blocking, user-visible error notifications
//! - Provide the **`StatusClient`** use-cases: `refresh`, `render`, `toggle`
//! - Provide the native **poller** that refreshes once per second
//!   (behind the default `tokio` feature)
//!
//! ## Dependency rule
//! Depends on `relayboard-domain` only (plus `tokio` for the poller).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.
//!
//! ## Execution model
//! Everything runs on one cooperative thread. Ports take `&self` and their
//! futures are not required to be `Send`, so the same client runs on a tokio
//! `LocalSet` and in the browser.

pub mod ports;
pub mod status_client;

#[cfg(feature = "tokio")]
pub mod poller;
