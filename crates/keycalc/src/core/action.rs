//! Decoded user actions and the dispatch step
//!
//! Adapters translate raw clicks and key presses into [`Action`]s; the
//! engine only ever sees these.

use tracing::debug;

use super::engine::{Digit, EngineState};
use super::operations::Operation;

/// One discrete user action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Type a digit
    Digit(Digit),
    /// Type a decimal point
    Decimal,
    /// Reset the whole calculator
    ClearAll,
    /// Reset only the current entry
    ClearEntry,
    /// Remove the last typed character
    Delete,
    /// Flip the sign of the current entry
    ToggleSign,
    /// Choose an operator
    Operation(Operation),
    /// Resolve the pending operator
    Equals,
}

impl Action {
    /// Convenience constructor for digit actions; `None` above 9
    #[must_use]
    pub const fn digit(value: u8) -> Option<Self> {
        match Digit::new(value) {
            Some(d) => Some(Self::Digit(d)),
            None => None,
        }
    }

    /// The `data-action` name used by keypad buttons
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Digit(_) => "digit",
            Self::Decimal => "decimal",
            Self::ClearAll => "clear",
            Self::ClearEntry => "clear-entry",
            Self::Delete => "delete",
            Self::ToggleSign => "sign",
            Self::Operation(_) => "operation",
            Self::Equals => "equals",
        }
    }

    /// The label printed on the keypad button for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::ClearAll => "C".to_string(),
            Self::ClearEntry => "CE".to_string(),
            Self::Delete => "⌫".to_string(),
            Self::ToggleSign => "±".to_string(),
            Self::Operation(op) => op.glyph().to_string(),
            Self::Equals => "=".to_string(),
        }
    }
}

impl EngineState {
    /// Applies one action and returns the next state
    #[must_use]
    pub fn dispatch(self, action: Action) -> Self {
        let next = match action {
            Action::Digit(d) => self.input_digit(d),
            Action::Decimal => self.input_decimal(),
            Action::ClearAll => self.clear_all(),
            Action::ClearEntry => self.clear_entry(),
            Action::Delete => self.delete_digit(),
            Action::ToggleSign => self.toggle_sign(),
            Action::Operation(op) => self.set_operation(op),
            Action::Equals => self.equals(),
        };
        debug!(
            action = action.kind(),
            entry = next.current_entry(),
            pending = ?next.pending_operator(),
            "dispatched action"
        );
        next
    }

    /// Applies a sequence of actions in order
    #[must_use]
    pub fn dispatch_all<I>(self, actions: I) -> Self
    where
        I: IntoIterator<Item = Action>,
    {
        actions.into_iter().fold(self, Self::dispatch)
    }
}
