//! [`RelayPanel`] implementation over the page DOM.

use relayboard_app::ports::RelayPanel;
use relayboard_domain::relay::{RelayId, RelayState};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

const TEMPERATURE_SELECTOR: &str = ".temperature";
const RELAYS_SELECTOR: &str = ".relays";
const RELAY_ATTRIBUTE: &str = "data-number";
const ON_CLASS: &str = "state-true";
const OFF_CLASS: &str = "state-false";

/// The `.temperature` element and the `.relays` container of the page.
///
/// Every direct child of `.relays` carrying `data-number` is a relay
/// control. The DOM is the only state: nothing is cached here.
pub struct DomPanel {
    temperature: Element,
    relays: Element,
}

impl DomPanel {
    /// Find the panel elements in `document`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the missing selector.
    pub fn attach(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            temperature: find(document, TEMPERATURE_SELECTOR)?,
            relays: find(document, RELAYS_SELECTOR)?,
        })
    }

    /// The `.relays` container, where clicks are listened for.
    #[must_use]
    pub fn container(&self) -> &Element {
        &self.relays
    }

    fn controls(&self) -> impl Iterator<Item = Element> {
        let children = self.relays.children();
        (0..children.length())
            .filter_map(move |index| children.item(index))
            .filter(|child| child.has_attribute(RELAY_ATTRIBUTE))
    }

    fn control(&self, relay: &RelayId) -> Option<Element> {
        self.controls().find(|control| {
            control.get_attribute(RELAY_ATTRIBUTE).as_deref() == Some(relay.as_str())
        })
    }
}

fn find(document: &Document, selector: &str) -> Result<Element, JsValue> {
    document
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("missing {selector} element")))
}

impl RelayPanel for DomPanel {
    fn show_temperature(&self, text: &str) {
        self.temperature.set_text_content(Some(text));
    }

    fn relays(&self) -> Vec<RelayId> {
        self.controls()
            .filter_map(|control| control.get_attribute(RELAY_ATTRIBUTE))
            .filter_map(|key| RelayId::new(key).ok())
            .collect()
    }

    fn relay_state(&self, relay: &RelayId) -> Option<RelayState> {
        let classes = self.control(relay)?.class_list();
        Some(if classes.contains(ON_CLASS) {
            RelayState::On
        } else if classes.contains(OFF_CLASS) {
            RelayState::Off
        } else {
            RelayState::Unknown
        })
    }

    fn set_relay_state(&self, relay: &RelayId, state: RelayState) -> bool {
        let Some(control) = self.control(relay) else {
            return false;
        };
        let classes = control.class_list();
        let _ = classes.remove_2(ON_CLASS, OFF_CLASS);
        if let Some(class) = state.css_class() {
            let _ = classes.add_1(class);
        }
        true
    }
}
