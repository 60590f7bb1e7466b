//! # relayboard-adapter-http-reqwest
//!
//! Native HTTP adapter built on [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the [`DeviceApi`](relayboard_app::ports::DeviceApi) port
//! - `GET /status`: map transport failures, non-200 answers and non-JSON
//!   bodies to [`StatusUnavailable`](relayboard_domain::error::StatusUnavailable)
//! - `POST /update`: send the toggle request as JSON and map status codes of
//!   400 and above to [`ToggleFailed`](relayboard_domain::error::ToggleFailed)
//!
//! ## Dependency rule
//! Depends on `relayboard-app` (port traits) and `relayboard-domain` only.
//! Never leaks reqwest types into the domain: transport errors are boxed.

pub mod client;
pub mod config;
pub mod error;

pub use client::HttpDeviceApi;
pub use config::HttpConfig;
pub use error::HttpError;
