//! Browser-style frontend modelled on a mock DOM
//!
//! Mirrors the page's event surface (button clicks and window key-downs)
//! so the page behaviour can be exercised without a browser.

mod dom;
mod driver;
mod keypad;
mod page;

pub use dom::{DomElement, DomEvent, MockDom, EVENT_HISTORY_LIMIT};
pub use driver::WebDriver;
pub use keypad::{action_from_attributes, key_to_action, KeypadButtonDef, WebKeypad, KEY_CLASS};
pub use page::{WebCalculator, CURRENT_ID, HISTORY_ID, KEYS_ID, PRESSED_CLASS, ROOT_ID};
