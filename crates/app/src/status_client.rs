//! Status client — polls, renders and toggles relays.

use relayboard_domain::error::ToggleFailed;
use relayboard_domain::relay::{RelayId, RelayState};
use relayboard_domain::status::DeviceStatus;
use relayboard_domain::temperature::format_temperature;
use relayboard_domain::toggle::ToggleRequest;

use crate::ports::notifier::TOGGLE_ERROR_MESSAGE;
use crate::ports::{DeviceApi, Notifier, RelayPanel};

/// Temperature text shown while the device status is unavailable.
pub const STATUS_ERROR_TEXT: &str = "error";

/// What a click on the panel led to.
#[derive(Debug)]
pub enum ToggleOutcome {
    /// The click did not hit a relay control; nothing was sent.
    Missed,
    /// The device accepted the new state.
    Applied { relay: RelayId, state: RelayState },
    /// The update failed; the optimistic state stays on screen until the
    /// next status refresh overwrites it.
    Failed {
        relay: RelayId,
        state: RelayState,
        error: ToggleFailed,
    },
}

/// Application service driving a [`RelayPanel`] from a [`DeviceApi`].
pub struct StatusClient<A, P, N> {
    api: A,
    panel: P,
    notifier: N,
}

impl<A, P, N> StatusClient<A, P, N>
where
    A: DeviceApi,
    P: RelayPanel,
    N: Notifier,
{
    /// Create a new client wired to the given adapters.
    pub fn new(api: A, panel: P, notifier: N) -> Self {
        Self {
            api,
            panel,
            notifier,
        }
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub fn panel(&self) -> &P {
        &self.panel
    }

    #[must_use]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Fetch the device status once and render it.
    ///
    /// Any failure renders the error state; it is never reported to the user
    /// since the next poll usually recovers.
    pub async fn refresh(&self) {
        match self.api.fetch_status().await {
            Ok(status) => self.render(Some(&status)),
            Err(error) => {
                tracing::debug!(error = %error, "device status unavailable");
                self.render(None);
            }
        }
    }

    /// Show `status` on the panel, or the error state when it is `None`.
    ///
    /// Relays the status does not mention keep their current state. Relays
    /// the panel has no control for are skipped. Rendering the same input
    /// twice leaves the panel unchanged.
    pub fn render(&self, status: Option<&DeviceStatus>) {
        match status {
            Some(status) => {
                self.panel
                    .show_temperature(&format_temperature(status.temperature));
                for (relay, &on) in &status.states {
                    if !self
                        .panel
                        .set_relay_state(relay, RelayState::from_reported(on))
                    {
                        tracing::debug!(%relay, "no control for reported relay");
                    }
                }
            }
            None => {
                self.panel.show_temperature(STATUS_ERROR_TEXT);
                for relay in self.panel.relays() {
                    self.panel.set_relay_state(&relay, RelayState::Unknown);
                }
            }
        }
        self.panel.present();
    }

    /// Handle a click on the panel.
    ///
    /// `target` is the relay whose control was clicked, `None` when the click
    /// missed every control. The control flips immediately, then the new
    /// state is sent to the device. Failures raise one notification. The
    /// panel is refreshed afterwards whenever the device answered, even with
    /// an error status; a transport failure skips that refresh.
    pub async fn toggle(&self, target: Option<RelayId>) -> ToggleOutcome {
        let Some(relay) = target else {
            return ToggleOutcome::Missed;
        };
        let Some(current) = self.panel.relay_state(&relay) else {
            tracing::debug!(%relay, "click on a relay without control");
            return ToggleOutcome::Missed;
        };

        let state = current.toggled();
        self.panel.set_relay_state(&relay, state);
        self.panel.present();

        let request = ToggleRequest::new(relay.clone(), state.is_on());
        tracing::info!(%relay, %state, "sending relay update");
        match self.api.send_update(&request).await {
            Ok(()) => {
                self.refresh().await;
                ToggleOutcome::Applied { relay, state }
            }
            Err(error) => {
                tracing::warn!(%relay, error = %error, "relay update failed");
                self.notifier.alert(TOGGLE_ERROR_MESSAGE);
                if error.reconciles() {
                    self.refresh().await;
                }
                ToggleOutcome::Failed {
                    relay,
                    state,
                    error,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relayboard_domain::error::StatusUnavailable;
    use std::cell::{Cell, RefCell};
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::rc::Rc;
    use tokio::sync::Notify;

    #[derive(Clone, Copy)]
    enum UpdateReply {
        Ok,
        Rejected(u16),
        Unreachable,
    }

    struct FakeApi {
        status: RefCell<Option<DeviceStatus>>,
        reply: Cell<UpdateReply>,
        gate: Option<Rc<Notify>>,
        fetches: Cell<usize>,
        updates: RefCell<Vec<ToggleRequest>>,
    }

    impl FakeApi {
        fn new(status: Option<DeviceStatus>) -> Self {
            Self {
                status: RefCell::new(status),
                reply: Cell::new(UpdateReply::Ok),
                gate: None,
                fetches: Cell::new(0),
                updates: RefCell::new(Vec::new()),
            }
        }

        fn replying(self, reply: UpdateReply) -> Self {
            self.reply.set(reply);
            self
        }

        fn gated(mut self, gate: Rc<Notify>) -> Self {
            self.gate = Some(gate);
            self
        }
    }

    impl DeviceApi for FakeApi {
        fn fetch_status(&self) -> impl Future<Output = Result<DeviceStatus, StatusUnavailable>> {
            self.fetches.set(self.fetches.get() + 1);
            let result = self
                .status
                .borrow()
                .clone()
                .ok_or(StatusUnavailable::UnexpectedStatus(500));
            async move { result }
        }

        fn send_update(
            &self,
            request: &ToggleRequest,
        ) -> impl Future<Output = Result<(), ToggleFailed>> {
            self.updates.borrow_mut().push(request.clone());
            let gate = self.gate.clone();
            let reply = self.reply.get();
            async move {
                if let Some(gate) = gate {
                    gate.notified().await;
                }
                match reply {
                    UpdateReply::Ok => Ok(()),
                    UpdateReply::Rejected(code) => Err(ToggleFailed::Rejected(code)),
                    UpdateReply::Unreachable => {
                        Err(ToggleFailed::Transport("connection refused".into()))
                    }
                }
            }
        }
    }

    #[derive(Default)]
    struct FakePanel {
        temperature: RefCell<String>,
        controls: RefCell<BTreeMap<RelayId, RelayState>>,
        presents: Cell<usize>,
    }

    impl FakePanel {
        fn with_relays(keys: &[&str]) -> Self {
            let panel = Self::default();
            for key in keys {
                panel
                    .controls
                    .borrow_mut()
                    .insert(relay(key), RelayState::Unknown);
            }
            panel
        }

        fn state(&self, key: &str) -> RelayState {
            self.controls.borrow()[&relay(key)]
        }
    }

    impl RelayPanel for FakePanel {
        fn show_temperature(&self, text: &str) {
            *self.temperature.borrow_mut() = text.to_string();
        }

        fn relays(&self) -> Vec<RelayId> {
            self.controls.borrow().keys().cloned().collect()
        }

        fn relay_state(&self, relay: &RelayId) -> Option<RelayState> {
            self.controls.borrow().get(relay).copied()
        }

        fn set_relay_state(&self, relay: &RelayId, state: RelayState) -> bool {
            match self.controls.borrow_mut().get_mut(relay) {
                Some(control) => {
                    *control = state;
                    true
                }
                None => false,
            }
        }

        fn present(&self) {
            self.presents.set(self.presents.get() + 1);
        }
    }

    #[derive(Default)]
    struct FakeNotifier {
        alerts: RefCell<Vec<String>>,
    }

    impl Notifier for FakeNotifier {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    fn relay(key: &str) -> RelayId {
        RelayId::new(key).unwrap()
    }

    fn status(temperature: Option<f64>, states: &[(&str, bool)]) -> DeviceStatus {
        DeviceStatus {
            temperature,
            states: states.iter().map(|(k, on)| (relay(k), *on)).collect(),
        }
    }

    fn make_client(
        api: FakeApi,
        relays: &[&str],
    ) -> StatusClient<FakeApi, FakePanel, FakeNotifier> {
        StatusClient::new(api, FakePanel::with_relays(relays), FakeNotifier::default())
    }

    // -----------------------------------------------------------------------
    // render
    // -----------------------------------------------------------------------

    #[test]
    fn should_render_reported_status() {
        let client = make_client(FakeApi::new(None), &["1", "2"]);

        client.render(Some(&status(Some(21.456), &[("1", true), ("2", false)])));

        assert_eq!(*client.panel().temperature.borrow(), "21.5ºC");
        assert_eq!(client.panel().state("1"), RelayState::On);
        assert_eq!(client.panel().state("2"), RelayState::Off);
    }

    #[test]
    fn should_render_empty_temperature_when_not_reported() {
        let client = make_client(FakeApi::new(None), &["1"]);
        client.panel().show_temperature("stale");

        client.render(Some(&status(None, &[])));

        assert_eq!(*client.panel().temperature.borrow(), "");
    }

    #[test]
    fn should_keep_unmentioned_relays_when_status_present() {
        let client = make_client(FakeApi::new(None), &["1", "2"]);
        client.render(Some(&status(Some(20.0), &[("1", true), ("2", true)])));

        client.render(Some(&status(Some(20.0), &[("1", false)])));

        assert_eq!(client.panel().state("1"), RelayState::Off);
        assert_eq!(client.panel().state("2"), RelayState::On);
    }

    #[test]
    fn should_skip_reported_relays_without_control() {
        let client = make_client(FakeApi::new(None), &["1"]);

        client.render(Some(&status(Some(20.0), &[("1", true), ("9", true)])));

        assert_eq!(client.panel().state("1"), RelayState::On);
        assert_eq!(client.panel().relays(), vec![relay("1")]);
    }

    #[test]
    fn should_render_error_state_when_status_absent() {
        let client = make_client(FakeApi::new(None), &["1", "2", "3"]);
        client.render(Some(&status(Some(20.0), &[("1", true), ("2", false)])));

        client.render(None);

        assert_eq!(*client.panel().temperature.borrow(), "error");
        for key in ["1", "2", "3"] {
            assert_eq!(client.panel().state(key), RelayState::Unknown);
        }
    }

    #[test]
    fn should_render_idempotently() {
        let client = make_client(FakeApi::new(None), &["1", "2"]);
        let reported = status(Some(18.25), &[("1", false)]);

        client.render(Some(&reported));
        let first = (
            client.panel().temperature.borrow().clone(),
            client.panel().controls.borrow().clone(),
        );
        client.render(Some(&reported));
        let second = (
            client.panel().temperature.borrow().clone(),
            client.panel().controls.borrow().clone(),
        );

        assert_eq!(first, second);
    }

    #[test]
    fn should_present_once_per_render() {
        let client = make_client(FakeApi::new(None), &["1", "2"]);

        client.render(Some(&status(Some(20.0), &[("1", true), ("2", true)])));

        assert_eq!(client.panel().presents.get(), 1);
    }

    // -----------------------------------------------------------------------
    // refresh
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn should_render_fetched_status_on_refresh() {
        let api = FakeApi::new(Some(status(Some(21.456), &[("1", true), ("2", false)])));
        let client = make_client(api, &["1", "2"]);

        client.refresh().await;

        assert_eq!(client.api().fetches.get(), 1);
        assert_eq!(*client.panel().temperature.borrow(), "21.5ºC");
        assert_eq!(client.panel().state("1"), RelayState::On);
        assert_eq!(client.panel().state("2"), RelayState::Off);
    }

    #[tokio::test]
    async fn should_render_error_state_when_refresh_fails() {
        let client = make_client(FakeApi::new(None), &["1"]);
        client.panel().set_relay_state(&relay("1"), RelayState::On);

        client.refresh().await;

        assert_eq!(*client.panel().temperature.borrow(), "error");
        assert_eq!(client.panel().state("1"), RelayState::Unknown);
        assert!(client.notifier().alerts.borrow().is_empty());
    }

    // -----------------------------------------------------------------------
    // toggle
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn should_ignore_click_outside_relays() {
        let client = make_client(FakeApi::new(None), &["1"]);

        let outcome = client.toggle(None).await;

        assert!(matches!(outcome, ToggleOutcome::Missed));
        assert!(client.api().updates.borrow().is_empty());
        assert_eq!(client.api().fetches.get(), 0);
    }

    #[tokio::test]
    async fn should_ignore_click_on_relay_without_control() {
        let client = make_client(FakeApi::new(None), &["1"]);

        let outcome = client.toggle(Some(relay("7"))).await;

        assert!(matches!(outcome, ToggleOutcome::Missed));
        assert!(client.api().updates.borrow().is_empty());
    }

    #[tokio::test]
    async fn should_flip_off_relay_on_before_device_answers() {
        let gate = Rc::new(Notify::new());
        let api = FakeApi::new(Some(status(Some(20.0), &[("1", true)]))).gated(gate.clone());
        let client = make_client(api, &["1"]);
        client.panel().set_relay_state(&relay("1"), RelayState::Off);

        let check = async {
            assert_eq!(client.panel().state("1"), RelayState::On);
            assert_eq!(client.api().fetches.get(), 0);
            gate.notify_one();
        };
        let (outcome, ()) = tokio::join!(client.toggle(Some(relay("1"))), check);

        assert!(matches!(
            outcome,
            ToggleOutcome::Applied {
                state: RelayState::On,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn should_flip_on_relay_off_before_device_answers() {
        let gate = Rc::new(Notify::new());
        let api = FakeApi::new(Some(status(Some(20.0), &[("1", false)]))).gated(gate.clone());
        let client = make_client(api, &["1"]);
        client.panel().set_relay_state(&relay("1"), RelayState::On);

        let check = async {
            assert_eq!(client.panel().state("1"), RelayState::Off);
            gate.notify_one();
        };
        let (outcome, ()) = tokio::join!(client.toggle(Some(relay("1"))), check);

        assert!(matches!(outcome, ToggleOutcome::Applied { .. }));
    }

    #[tokio::test]
    async fn should_send_single_relay_request() {
        let client = make_client(FakeApi::new(None), &["1", "2"]);
        client.panel().set_relay_state(&relay("2"), RelayState::On);

        client.toggle(Some(relay("2"))).await;

        let updates = client.api().updates.borrow();
        assert_eq!(*updates, vec![ToggleRequest::new(relay("2"), false)]);
    }

    #[tokio::test]
    async fn should_turn_unknown_relay_on() {
        let client = make_client(FakeApi::new(None), &["1"]);

        client.toggle(Some(relay("1"))).await;

        let updates = client.api().updates.borrow();
        assert_eq!(*updates, vec![ToggleRequest::new(relay("1"), true)]);
    }

    #[tokio::test]
    async fn should_refresh_without_alert_when_update_accepted() {
        let api = FakeApi::new(Some(status(Some(20.0), &[("1", true)])));
        let client = make_client(api, &["1"]);

        let outcome = client.toggle(Some(relay("1"))).await;

        assert!(matches!(outcome, ToggleOutcome::Applied { .. }));
        assert!(client.notifier().alerts.borrow().is_empty());
        assert_eq!(client.api().fetches.get(), 1);
    }

    #[tokio::test]
    async fn should_alert_once_and_refresh_once_when_update_rejected() {
        let api = FakeApi::new(Some(status(Some(20.0), &[("1", false)])))
            .replying(UpdateReply::Rejected(500));
        let client = make_client(api, &["1"]);
        client.panel().set_relay_state(&relay("1"), RelayState::Off);

        let outcome = client.toggle(Some(relay("1"))).await;

        assert!(matches!(
            outcome,
            ToggleOutcome::Failed {
                error: ToggleFailed::Rejected(500),
                ..
            }
        ));
        assert_eq!(
            *client.notifier().alerts.borrow(),
            vec!["error toggling relay".to_string()]
        );
        assert_eq!(client.api().fetches.get(), 1);
        // the refresh reverted the optimistic state
        assert_eq!(client.panel().state("1"), RelayState::Off);
    }

    #[tokio::test]
    async fn should_alert_without_refresh_when_device_unreachable() {
        let api = FakeApi::new(Some(status(Some(20.0), &[("1", false)])))
            .replying(UpdateReply::Unreachable);
        let client = make_client(api, &["1"]);
        client.panel().set_relay_state(&relay("1"), RelayState::Off);

        let outcome = client.toggle(Some(relay("1"))).await;

        assert!(matches!(
            outcome,
            ToggleOutcome::Failed {
                error: ToggleFailed::Transport(_),
                ..
            }
        ));
        assert_eq!(client.notifier().alerts.borrow().len(), 1);
        assert_eq!(client.api().fetches.get(), 0);
        assert_eq!(client.panel().state("1"), RelayState::On);
    }
}
