//! # relayboard — terminal relay board
//!
//! Composition root that wires the HTTP device client to the console panel.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialise logging to stderr
//! - Construct the adapters and the [`StatusClient`]
//! - Poll the device status every second
//! - Turn each stdin line into a relay click
//! - Exit on Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::io::{Stderr, Stdout};
use std::rc::Rc;

use relayboard_adapter_console::input::parse_click;
use relayboard_adapter_console::{ConsoleNotifier, ConsolePanel};
use relayboard_adapter_http_reqwest::HttpDeviceApi;
use relayboard_app::poller;
use relayboard_app::status_client::{StatusClient, ToggleOutcome};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::LocalSet;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

type Client = StatusClient<HttpDeviceApi, ConsolePanel<Stdout>, ConsoleNotifier<Stderr>>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .with_writer(std::io::stderr)
        .init();

    let api = HttpDeviceApi::new(&config.device)?;
    let panel = ConsolePanel::new(config.panel.relay_ids()?, std::io::stdout());
    let notifier = ConsoleNotifier::new(std::io::stderr());
    let client: Rc<Client> = Rc::new(StatusClient::new(api, panel, notifier));

    tracing::info!(url = %client.api().status_url(), "polling device");

    LocalSet::new()
        .run_until(async move {
            let polling = poller::spawn(Rc::clone(&client));
            let clicks = tokio::task::spawn_local(read_clicks(client));

            tokio::signal::ctrl_c().await?;
            tracing::info!("shutting down");
            clicks.abort();
            polling.abort();
            Ok::<_, Box<dyn std::error::Error>>(())
        })
        .await
}

/// Read relay clicks from stdin until it closes. Polling carries on after.
async fn read_clicks(client: Rc<Client>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let client = Rc::clone(&client);
                tokio::task::spawn_local(async move {
                    if let ToggleOutcome::Missed = client.toggle(parse_click(&line)).await {
                        tracing::debug!(input = %line.trim(), "input does not name a relay");
                    }
                });
            }
            Ok(None) => {
                tracing::debug!("input closed");
                return;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to read input");
                return;
            }
        }
    }
}
