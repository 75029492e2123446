//! The calculator page: readouts, keypad and event handling
//!
//! Owns the engine state and a [`MockDom`] laid out like the real page.
//! Events come in through [`WebCalculator::handle_event`]; highlight
//! expiry is driven by [`WebCalculator::tick`].

use std::time::Instant;

use tracing::trace;

use super::dom::{DomElement, DomEvent, MockDom};
use super::keypad::{action_from_attributes, key_to_action, WebKeypad, KEY_CLASS};
use crate::config::CalcConfig;
use crate::core::{Action, DisplaySnapshot, EngineState, NumberFormat};
use crate::driver::DisplaySink;
use crate::feedback::PressFeedback;

/// ID of the page root carrying the accessibility label
pub const ROOT_ID: &str = "calculator";
/// ID of the history readout
pub const HISTORY_ID: &str = "history";
/// ID of the current-value readout
pub const CURRENT_ID: &str = "current";
/// ID of the keypad container
pub const KEYS_ID: &str = "keys";
/// Class added to a button while it is highlighted
pub const PRESSED_CLASS: &str = "is-pressed";

impl DisplaySink for MockDom {
    fn render(&mut self, snapshot: &DisplaySnapshot) {
        self.set_element_text(CURRENT_ID, &snapshot.current);
        self.set_element_text(HISTORY_ID, &snapshot.history);
        self.set_element_attr(ROOT_ID, "aria-label", &snapshot.aria_label);
    }
}

/// Page model of the browser calculator
#[derive(Debug)]
pub struct WebCalculator {
    state: EngineState,
    dom: MockDom,
    keypad: WebKeypad,
    feedback: PressFeedback<String>,
    format: NumberFormat,
}

impl Default for WebCalculator {
    fn default() -> Self {
        Self::new(&CalcConfig::default())
    }
}

impl WebCalculator {
    /// Builds the page and renders the initial state
    #[must_use]
    pub fn new(config: &CalcConfig) -> Self {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("main").with_id(ROOT_ID));
        dom.register_element(
            DomElement::new("div")
                .with_id(HISTORY_ID)
                .with_attr("aria-live", "polite"),
        );
        dom.register_element(
            DomElement::new("div")
                .with_id(CURRENT_ID)
                .with_attr("aria-live", "polite"),
        );
        dom.register_element(DomElement::new("div").with_id(KEYS_ID));

        let keypad = WebKeypad::new();
        keypad.mount(&mut dom);

        let mut page = Self {
            state: EngineState::new(),
            dom,
            keypad,
            feedback: PressFeedback::new(config.press_duration()),
            format: config.number_format(),
        };
        page.refresh();
        page
    }

    /// Engine state behind the page
    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// The page document
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// The keypad definition
    #[must_use]
    pub fn keypad(&self) -> &WebKeypad {
        &self.keypad
    }

    /// Snapshot of what the readouts should show
    #[must_use]
    pub fn snapshot(&self) -> DisplaySnapshot {
        self.state.snapshot(&self.format)
    }

    /// Text of the current readout
    #[must_use]
    pub fn current_text(&self) -> &str {
        self.dom.get_element_text(CURRENT_ID).unwrap_or_default()
    }

    /// Text of the history readout
    #[must_use]
    pub fn history_text(&self) -> &str {
        self.dom.get_element_text(HISTORY_ID).unwrap_or_default()
    }

    /// Accessibility label of the page root
    #[must_use]
    pub fn aria_label(&self) -> &str {
        self.dom
            .get_element(ROOT_ID)
            .and_then(|e| e.get_attr("aria-label"))
            .unwrap_or_default()
    }

    /// IDs of the buttons currently highlighted
    #[must_use]
    pub fn pressed_ids(&self) -> Vec<String> {
        self.dom.ids_with_class(PRESSED_CLASS)
    }

    /// Handles one page event; returns the action it produced, if any
    pub fn handle_event(&mut self, event: DomEvent, now: Instant) -> Option<Action> {
        self.dom.record_event(event.clone());
        let (action, button_id) = match &event {
            DomEvent::Click { element_id } => {
                let Some(button) = self
                    .dom
                    .get_element(element_id)
                    .filter(|e| e.tag == "button" && e.has_class(KEY_CLASS))
                else {
                    trace!(%element_id, "click outside keypad ignored");
                    return None;
                };
                (action_from_attributes(button), Some(element_id.clone()))
            }
            DomEvent::KeyDown { key } => {
                let action = key_to_action(key);
                let id = action
                    .and_then(|a| self.keypad.find_button_by_action(a))
                    .map(|b| b.id.clone());
                (action, id)
            }
        };

        if let Some(id) = button_id {
            self.highlight(id, now);
        }

        let Some(action) = action else {
            trace!(?event, "unmapped input ignored");
            return None;
        };
        self.apply(action);
        Some(action)
    }

    /// Releases highlights whose deadline has passed
    pub fn tick(&mut self, now: Instant) {
        for id in self.feedback.expire(now) {
            self.dom.remove_element_class(&id, PRESSED_CLASS);
        }
    }

    fn highlight(&mut self, id: String, now: Instant) {
        self.dom.add_element_class(&id, PRESSED_CLASS);
        self.feedback.press(id, now);
    }

    fn apply(&mut self, action: Action) {
        self.state = std::mem::take(&mut self.state).dispatch(action);
        self.refresh();
    }

    fn refresh(&mut self) {
        let snapshot = self.snapshot();
        self.dom.render(&snapshot);
    }
}
