//! Keyboard input mapping for the terminal calculator

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{Action, Digit, Operation};

/// What a key press asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed an action to the calculator
    Calc(Action),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    ///
    /// Clear-entry and sign toggle have no key binding; they are reachable
    /// from the keypad only.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        let action = match code {
            KeyCode::Char(c) => Self::char_action(c),
            KeyCode::Enter => Some(Action::Equals),
            KeyCode::Backspace => Some(Action::Delete),
            KeyCode::Esc => Some(Action::ClearAll),
            _ => None,
        };
        action.map_or(KeyAction::None, KeyAction::Calc)
    }

    /// Action for a printable key, if it has one
    #[must_use]
    pub fn char_action(c: char) -> Option<Action> {
        match c {
            '.' => Some(Action::Decimal),
            '=' => Some(Action::Equals),
            _ => Digit::from_char(c)
                .map(Action::Digit)
                .or_else(|| Operation::from_symbol(c).map(Action::Operation)),
        }
    }
}
