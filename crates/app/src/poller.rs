//! Native status poller.
//!
//! Refreshes the panel immediately, then once every [`POLL_INTERVAL`] for as
//! long as the process lives. Each tick spawns its own refresh, so a device
//! that answers slowly never delays the next poll; whichever response
//! arrives last wins.

use std::rc::Rc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::ports::{DeviceApi, Notifier, RelayPanel};
use crate::status_client::StatusClient;

/// Fixed delay between two status polls.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Spawn the poll loop on the current [`LocalSet`](tokio::task::LocalSet).
///
/// # Panics
///
/// Panics when called outside of a `LocalSet`.
pub fn spawn<A, P, N>(client: Rc<StatusClient<A, P, N>>) -> JoinHandle<()>
where
    A: DeviceApi + 'static,
    P: RelayPanel + 'static,
    N: Notifier + 'static,
{
    tokio::task::spawn_local(run(client))
}

/// Poll forever. Must run inside a [`LocalSet`](tokio::task::LocalSet).
pub async fn run<A, P, N>(client: Rc<StatusClient<A, P, N>>)
where
    A: DeviceApi + 'static,
    P: RelayPanel + 'static,
    N: Notifier + 'static,
{
    let mut ticker = tokio::time::interval(POLL_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        let client = Rc::clone(&client);
        tokio::task::spawn_local(async move { client.refresh().await });
    }
}
