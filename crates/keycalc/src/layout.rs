//! Keypad layout shared by the terminal and web frontends
//!
//! ```text
//! [ C ] [CE ] [ ⌫ ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ ± ] [ 0 ] [ . ] [ = ]
//! ```

use crate::core::{Action, Digit, Operation};

/// Number of keypad rows
pub const ROWS: usize = 5;

/// Number of keypad columns
pub const COLS: usize = 4;

/// Digit action for a literal 0 through 9; out-of-range input is a bug
pub(crate) const fn digit(value: u8) -> Action {
    match Digit::new(value) {
        Some(d) => Action::Digit(d),
        None => panic!("keypad digit out of range"),
    }
}

/// Actions in row-major order
pub const KEYPAD: [[Action; COLS]; ROWS] = [
    [
        Action::ClearAll,
        Action::ClearEntry,
        Action::Delete,
        Action::Operation(Operation::Divide),
    ],
    [
        digit(7),
        digit(8),
        digit(9),
        Action::Operation(Operation::Multiply),
    ],
    [
        digit(4),
        digit(5),
        digit(6),
        Action::Operation(Operation::Subtract),
    ],
    [
        digit(1),
        digit(2),
        digit(3),
        Action::Operation(Operation::Add),
    ],
    [Action::ToggleSign, digit(0), Action::Decimal, Action::Equals],
];

/// Iterates `((row, col), action)` over the whole keypad
pub fn positions() -> impl Iterator<Item = ((usize, usize), Action)> {
    KEYPAD.iter().enumerate().flat_map(|(row, actions)| {
        actions
            .iter()
            .enumerate()
            .map(move |(col, action)| ((row, col), *action))
    })
}

/// Grid position of the button that performs `action`
#[must_use]
pub fn position_of(action: Action) -> Option<(usize, usize)> {
    positions().find(|(_, a)| *a == action).map(|(pos, _)| pos)
}
