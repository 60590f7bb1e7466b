//! # relayboard-adapter-console
//!
//! Terminal counterpart of the browser page.
//!
//! ## Responsibilities
//! - [`ConsolePanel`]: a [`RelayPanel`](relayboard_app::ports::RelayPanel)
//!   whose relay controls come from configuration, drawn as one status line
//!   (`temperature: 21.5ºC | 1: on | 2: off | 3: -`) each time it changes
//! - [`ConsoleNotifier`]: a [`Notifier`](relayboard_app::ports::Notifier)
//!   writing alerts to an error stream
//! - [`input::parse_click`]: turn a typed line into the relay that was "clicked"
//!
//! ## Dependency rule
//! Depends on `relayboard-app` (port traits) and `relayboard-domain` only.
//! Writers are generic so tests can capture output in memory.

pub mod config;
pub mod error;
pub mod input;
pub mod notifier;
pub mod panel;

pub use config::PanelConfig;
pub use error::ConsoleError;
pub use notifier::ConsoleNotifier;
pub use panel::ConsolePanel;
