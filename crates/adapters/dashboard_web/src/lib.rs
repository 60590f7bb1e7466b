//! # relayboard-adapter-dashboard-web
//!
//! WebAssembly entry point for the page served by the device itself.
//!
//! The page provides the markup; this crate only attaches to it:
//!
//! ```html
//! <span class="temperature"></span>
//! <div class="relays">
//!   <button data-number="1">Relay 1</button>
//!   <button data-number="2">Relay 2</button>
//! </div>
//! ```
//!
//! On start the status is fetched immediately and then every second. A click
//! on a `[data-number]` control inside `.relays` toggles that relay.
//!
//! Built on its own (`wasm32-unknown-unknown`), outside the workspace.

pub mod api;
pub mod notifier;
pub mod panel;

use std::rc::Rc;

use gloo_timers::callback::Interval;
use relayboard_app::status_client::StatusClient;
use relayboard_domain::relay::RelayId;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, Node};

use crate::api::GlooDeviceApi;
use crate::notifier::AlertNotifier;
use crate::panel::DomPanel;

/// Delay between two status polls, in milliseconds.
const POLL_INTERVAL_MS: u32 = 1_000;

type Client = StatusClient<GlooDeviceApi, DomPanel, AlertNotifier>;

/// Attach to the page and start polling, waiting for `DOMContentLoaded`
/// when the script runs before the markup is parsed.
///
/// # Errors
///
/// Fails when there is no document, or when the page lacks the
/// `.temperature` or `.relays` element once it is ready.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    if !is_parsed(&document.ready_state()) {
        let target = document.clone();
        let ready = Closure::once_into_js(move || {
            if let Err(err) = attach(&target) {
                tracing::error!(?err, "failed to attach to the page");
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", ready.unchecked_ref())?;
        return Ok(());
    }
    attach(&document)
}

/// Whether `document.readyState` means the markup is available.
fn is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

fn attach(document: &Document) -> Result<(), JsValue> {
    let panel = DomPanel::attach(document)?;
    let container = panel.container().clone();
    let client: Rc<Client> = Rc::new(StatusClient::new(GlooDeviceApi, panel, AlertNotifier));

    listen_for_clicks(&container, Rc::clone(&client))?;
    poll(client);
    Ok(())
}

fn poll(client: Rc<Client>) {
    refresh(Rc::clone(&client));
    Interval::new(POLL_INTERVAL_MS, move || refresh(Rc::clone(&client))).forget();
}

fn refresh(client: Rc<Client>) {
    spawn_local(async move { client.refresh().await });
}

fn listen_for_clicks(container: &Element, client: Rc<Client>) -> Result<(), JsValue> {
    let scope = container.clone();
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        let target = clicked_relay(&scope, &event);
        let client = Rc::clone(&client);
        spawn_local(async move {
            client.toggle(target).await;
        });
    });
    container.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

/// The relay whose control contains the click target, if any.
fn clicked_relay(container: &Element, event: &Event) -> Option<RelayId> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let control = target.closest("[data-number]").ok()??;
    let node: &Node = &control;
    if !container.contains(Some(node)) {
        return None;
    }
    RelayId::new(control.get_attribute("data-number")?).ok()
}
