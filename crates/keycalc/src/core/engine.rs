//! Calculator engine state and its transitions
//!
//! Every transition consumes the current [`EngineState`] and returns the
//! next one. None of them can fail: bad arithmetic ends up as a `NaN` entry,
//! not an error.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::format::{display_string, numeric_value};
use super::operations::{apply, Operation};

/// A single decimal digit, 0 through 9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit, rejecting values above 9
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Parses an ASCII digit character
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_digit() {
            Some(Self(c as u8 - b'0'))
        } else {
            None
        }
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the ASCII character
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The complete calculator state
///
/// Invariants: `current_entry` is never empty and holds at most one decimal
/// point; `pending_operator` is set only between choosing an operator and
/// resolving it with `equals` or a chained operator.
///
/// Equality compares `accumulated_value` bit for bit, so a state holding
/// `NaN` still equals itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineState {
    current_entry: String,
    accumulated_value: Option<f64>,
    pending_operator: Option<Operation>,
    overwrite_on_next_digit: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for EngineState {
    fn eq(&self, other: &Self) -> bool {
        self.current_entry == other.current_entry
            && self.accumulated_value.map(f64::to_bits) == other.accumulated_value.map(f64::to_bits)
            && self.pending_operator == other.pending_operator
            && self.overwrite_on_next_digit == other.overwrite_on_next_digit
    }
}

impl Eq for EngineState {}

impl EngineState {
    /// Creates the initial state: entry `0`, nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_entry: "0".to_string(),
            accumulated_value: None,
            pending_operator: None,
            overwrite_on_next_digit: false,
        }
    }

    /// The literal currently being typed (or the last result)
    #[must_use]
    pub fn current_entry(&self) -> &str {
        &self.current_entry
    }

    /// The left operand held across a pending operator
    #[must_use]
    pub fn accumulated_value(&self) -> Option<f64> {
        self.accumulated_value
    }

    /// The operator waiting for its right operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operation> {
        self.pending_operator
    }

    /// Whether the next digit starts a fresh entry
    #[must_use]
    pub fn overwrite_on_next_digit(&self) -> bool {
        self.overwrite_on_next_digit
    }

    /// Numeric reading of the current entry
    #[must_use]
    pub fn current_value(&self) -> f64 {
        numeric_value(&self.current_entry)
    }

    /// Types a digit, suppressing a lone leading zero
    #[must_use]
    pub fn input_digit(mut self, digit: Digit) -> Self {
        if self.overwrite_on_next_digit {
            self.current_entry = digit.to_string();
            self.overwrite_on_next_digit = false;
        } else if self.current_entry == "0" {
            self.current_entry = digit.to_string();
        } else {
            self.current_entry.push(digit.as_char());
        }
        self
    }

    /// Types a decimal point; a second point in the same entry is ignored
    #[must_use]
    pub fn input_decimal(mut self) -> Self {
        if self.overwrite_on_next_digit {
            self.current_entry = "0.".to_string();
            self.overwrite_on_next_digit = false;
        } else if !self.current_entry.contains('.') {
            self.current_entry.push('.');
        }
        self
    }

    /// Resets everything to the initial state
    #[must_use]
    pub fn clear_all(self) -> Self {
        Self::new()
    }

    /// Resets only the current entry
    #[must_use]
    pub fn clear_entry(mut self) -> Self {
        self.current_entry = "0".to_string();
        self
    }

    /// Removes the last typed character
    #[must_use]
    pub fn delete_digit(mut self) -> Self {
        if self.overwrite_on_next_digit {
            self.current_entry = "0".to_string();
            self.overwrite_on_next_digit = false;
            return self;
        }
        let len = self.current_entry.len();
        if len <= 1 || (len == 2 && self.current_entry.starts_with('-')) {
            self.current_entry = "0".to_string();
        } else {
            self.current_entry.pop();
        }
        self
    }

    /// Flips the sign of the current entry; `0` has no sign
    #[must_use]
    pub fn toggle_sign(mut self) -> Self {
        if self.current_entry == "0" {
            return self;
        }
        self.current_entry = match self.current_entry.strip_prefix('-') {
            Some(rest) => rest.to_string(),
            None => format!("-{}", self.current_entry),
        };
        self
    }

    /// Selects an operator, resolving a pending one first when a new
    /// operand has been typed since (left-to-right, no precedence)
    #[must_use]
    pub fn set_operation(mut self, op: Operation) -> Self {
        let value = self.current_value();
        match (self.pending_operator, self.accumulated_value) {
            (Some(pending), Some(acc)) if !self.overwrite_on_next_digit => {
                let result = apply(acc, value, Some(pending));
                trace!(acc, value, ?pending, result, "chained pending operator");
                self.accumulated_value = Some(result);
                self.current_entry = display_string(result);
            }
            (_, None) => self.accumulated_value = Some(value),
            _ => {}
        }
        self.pending_operator = Some(op);
        self.overwrite_on_next_digit = true;
        self
    }

    /// Resolves the pending operator against the current entry
    #[must_use]
    pub fn equals(mut self) -> Self {
        let (Some(op), Some(acc)) = (self.pending_operator, self.accumulated_value) else {
            return self;
        };
        let result = apply(acc, self.current_value(), Some(op));
        self.current_entry = display_string(result);
        self.accumulated_value = None;
        self.pending_operator = None;
        self.overwrite_on_next_digit = true;
        self
    }
}
