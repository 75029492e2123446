//! Web keypad: button elements and the key/click decoding boundary
//!
//! Buttons carry `data-action`, `data-digit` and `data-op` attributes; a
//! click is decoded from those attributes, not from the element ID.

use super::dom::{DomElement, MockDom};
use crate::core::{Action, Digit, Operation};
use crate::layout;

/// Class carried by every keypad button
pub const KEY_CLASS: &str = "key";

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The action this button performs
    pub action: Action,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a new button definition
    #[must_use]
    pub fn new(action: Action, row: usize, col: usize) -> Self {
        let id = match action {
            Action::Digit(d) => format!("btn-{d}"),
            Action::Operation(op) => format!("btn-{}", op_name(op)),
            other => format!("btn-{}", other.kind()),
        };
        Self {
            action,
            id,
            row,
            col,
        }
    }

    /// Builds the `<button>` element for this definition
    #[must_use]
    pub fn to_element(&self) -> DomElement {
        let mut elem = DomElement::new("button")
            .with_id(&self.id)
            .with_text(&self.action.label())
            .with_class(KEY_CLASS)
            .with_attr("data-action", self.action.kind());
        match self.action {
            Action::Digit(d) => elem.set_attr("data-digit", &d.to_string()),
            Action::Operation(op) => elem.set_attr("data-op", &op.symbol().to_string()),
            _ => {}
        }
        elem
    }
}

/// Returns a name for an operator (for element IDs)
fn op_name(op: Operation) -> &'static str {
    match op {
        Operation::Add => "plus",
        Operation::Subtract => "minus",
        Operation::Multiply => "times",
        Operation::Divide => "divide",
    }
}

/// Decodes a button element's data attributes into an action
///
/// Missing or malformed attributes decode to `None`, which the page ignores.
#[must_use]
pub fn action_from_attributes(elem: &DomElement) -> Option<Action> {
    match elem.get_attr("data-action")? {
        "digit" => {
            let mut chars = elem.get_attr("data-digit")?.chars();
            let digit = Digit::from_char(chars.next()?)?;
            chars.next().is_none().then_some(Action::Digit(digit))
        }
        "decimal" => Some(Action::Decimal),
        "clear" => Some(Action::ClearAll),
        "clear-entry" => Some(Action::ClearEntry),
        "delete" => Some(Action::Delete),
        "sign" => Some(Action::ToggleSign),
        "operation" => {
            let mut chars = elem.get_attr("data-op")?.chars();
            let op = Operation::from_symbol(chars.next()?)?;
            chars.next().is_none().then_some(Action::Operation(op))
        }
        "equals" => Some(Action::Equals),
        _ => None,
    }
}

/// Maps a `KeyboardEvent.key` value to an action
///
/// Unmapped keys return `None` and are ignored by the page.
#[must_use]
pub fn key_to_action(key: &str) -> Option<Action> {
    match key {
        "Enter" | "=" => Some(Action::Equals),
        "Backspace" => Some(Action::Delete),
        "Escape" => Some(Action::ClearAll),
        "." => Some(Action::Decimal),
        _ => {
            let mut chars = key.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            Digit::from_char(c)
                .map(Action::Digit)
                .or_else(|| Operation::from_symbol(c).map(Action::Operation))
        }
    }
}

/// The page keypad
#[derive(Debug, Clone)]
pub struct WebKeypad {
    buttons: Vec<KeypadButtonDef>,
}

impl Default for WebKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl WebKeypad {
    /// Creates the standard keypad from the shared layout
    #[must_use]
    pub fn new() -> Self {
        let buttons = layout::positions()
            .map(|((row, col), action)| KeypadButtonDef::new(action, row, col))
            .collect();
        Self { buttons }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        if row < layout::ROWS && col < layout::COLS {
            self.buttons.get(row * layout::COLS + col)
        } else {
            None
        }
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button that performs `action`
    #[must_use]
    pub fn find_button_by_action(&self, action: Action) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Registers every button element in the DOM
    pub fn mount(&self, dom: &mut MockDom) {
        for btn in &self.buttons {
            dom.register_element(btn.to_element());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(d: u8) -> Action {
        Action::digit(d).unwrap()
    }

    // ===== KeypadButtonDef tests =====

    #[test]
    fn test_button_ids() {
        assert_eq!(KeypadButtonDef::new(digit(5), 2, 1).id, "btn-5");
        assert_eq!(
            KeypadButtonDef::new(Action::Operation(Operation::Add), 3, 3).id,
            "btn-plus"
        );
        assert_eq!(
            KeypadButtonDef::new(Action::Operation(Operation::Divide), 0, 3).id,
            "btn-divide"
        );
        assert_eq!(KeypadButtonDef::new(Action::Equals, 4, 3).id, "btn-equals");
        assert_eq!(
            KeypadButtonDef::new(Action::ClearEntry, 0, 1).id,
            "btn-clear-entry"
        );
        assert_eq!(KeypadButtonDef::new(Action::ToggleSign, 4, 0).id, "btn-sign");
    }

    #[test]
    fn test_digit_element_attributes() {
        let elem = KeypadButtonDef::new(digit(7), 1, 0).to_element();
        assert_eq!(elem.tag, "button");
        assert!(elem.has_class(KEY_CLASS));
        assert_eq!(elem.get_attr("data-action"), Some("digit"));
        assert_eq!(elem.get_attr("data-digit"), Some("7"));
        assert_eq!(elem.get_attr("data-op"), None);
    }

    #[test]
    fn test_operator_element_attributes() {
        let elem = KeypadButtonDef::new(Action::Operation(Operation::Multiply), 1, 3).to_element();
        assert_eq!(elem.text_content, "×");
        assert_eq!(elem.get_attr("data-action"), Some("operation"));
        assert_eq!(elem.get_attr("data-op"), Some("*"));
    }

    // ===== Attribute decoding =====

    #[test]
    fn test_every_button_decodes_to_its_action() {
        for btn in WebKeypad::new().buttons() {
            assert_eq!(action_from_attributes(&btn.to_element()), Some(btn.action));
        }
    }

    #[test]
    fn test_decode_rejects_malformed_attributes() {
        let no_action = DomElement::new("button");
        assert_eq!(action_from_attributes(&no_action), None);

        let bad_digit = DomElement::new("button")
            .with_attr("data-action", "digit")
            .with_attr("data-digit", "12");
        assert_eq!(action_from_attributes(&bad_digit), None);

        let bad_op = DomElement::new("button")
            .with_attr("data-action", "operation")
            .with_attr("data-op", "%");
        assert_eq!(action_from_attributes(&bad_op), None);

        let unknown = DomElement::new("button").with_attr("data-action", "memory-recall");
        assert_eq!(action_from_attributes(&unknown), None);
    }

    // ===== Key mapping =====

    #[test]
    fn test_key_digits() {
        for d in 0..=9u8 {
            assert_eq!(key_to_action(&d.to_string()), Some(digit(d)));
        }
    }

    #[test]
    fn test_key_operators() {
        for op in Operation::ALL {
            assert_eq!(
                key_to_action(&op.symbol().to_string()),
                Some(Action::Operation(op))
            );
        }
    }

    #[test]
    fn test_key_named() {
        assert_eq!(key_to_action("Enter"), Some(Action::Equals));
        assert_eq!(key_to_action("="), Some(Action::Equals));
        assert_eq!(key_to_action("Backspace"), Some(Action::Delete));
        assert_eq!(key_to_action("Escape"), Some(Action::ClearAll));
        assert_eq!(key_to_action("."), Some(Action::Decimal));
    }

    #[test]
    fn test_key_unmapped() {
        for key in ["a", "%", "^", "Tab", "Delete", "F1", "", "12", "Shift"] {
            assert_eq!(key_to_action(key), None, "key {key:?} should be ignored");
        }
    }

    // ===== WebKeypad =====

    #[test]
    fn test_keypad_layout() {
        let keypad = WebKeypad::new();
        assert_eq!(keypad.button_count(), layout::ROWS * layout::COLS);
        assert_eq!(keypad.get_button_at(0, 0).unwrap().action, Action::ClearAll);
        assert_eq!(keypad.get_button_at(4, 3).unwrap().action, Action::Equals);
        assert!(keypad.get_button_at(5, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    #[test]
    fn test_find_buttons() {
        let keypad = WebKeypad::new();
        assert_eq!(keypad.find_button_by_id("btn-9").unwrap().action, digit(9));
        assert_eq!(
            keypad.find_button_by_action(Action::Decimal).unwrap().id,
            "btn-decimal"
        );
        assert!(keypad.find_button_by_id("btn-percent").is_none());
    }

    #[test]
    fn test_mount_registers_buttons() {
        let mut dom = MockDom::new();
        WebKeypad::new().mount(&mut dom);
        assert_eq!(dom.ids_with_class(KEY_CLASS).len(), layout::ROWS * layout::COLS);
    }
}
