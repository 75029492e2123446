//! Frontend boundary: output sinks and the unified calculator driver
//!
//! The same scenario functions run against every frontend: write the test
//! logic once, drive it through the terminal app or the web page model.

use crate::core::{Action, DisplaySnapshot, EngineState, Operation};
use crate::layout::digit;

/// Receives the rendered readouts after every update
pub trait DisplaySink {
    /// Shows one snapshot
    fn render(&mut self, snapshot: &DisplaySnapshot);
}

/// Abstract driver for calculator interactions
///
/// Implemented by both frontends so the scenarios below exercise the full
/// path from a user gesture to the rendered readouts.
pub trait CalculatorDriver {
    /// Performs the user gesture that produces `action`
    fn press(&mut self, action: Action);

    /// What the readouts currently show
    fn display(&self) -> DisplaySnapshot;

    /// The engine state behind the readouts
    fn state(&self) -> &EngineState;

    /// Performs several gestures in order
    fn press_all(&mut self, actions: &[Action]) {
        for action in actions {
            self.press(*action);
        }
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use std::time::Instant;

    use super::CalculatorDriver;
    use crate::config::CalcConfig;
    use crate::core::{Action, DisplaySnapshot, EngineState};
    use crate::tui::CalculatorApp;

    /// Drives a [`CalculatorApp`] by clicking its keypad
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a driver over an app built from `config`
        #[must_use]
        pub fn with_config(config: &CalcConfig) -> Self {
            Self {
                app: CalculatorApp::new(config),
            }
        }

        /// Returns a reference to the app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, action: Action) {
            let now = Instant::now();
            if let Some(index) = self.app.keypad().find_button(action) {
                self.app.click(index, now);
            }
            self.app.tick(now);
        }

        fn display(&self) -> DisplaySnapshot {
            self.app.display()
        }

        fn state(&self) -> &EngineState {
            self.app.state()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

fn op(op: Operation) -> Action {
    Action::Operation(op)
}

// ===== Unified scenarios =====
// These work with ANY CalculatorDriver implementation

/// Verifies the four basic operations
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.press_all(&[digit(2), op(Operation::Add), digit(3), Action::Equals]);
    assert_eq!(driver.display().current, "5");
    driver.press(Action::ClearAll);

    driver.press_all(&[
        digit(1),
        digit(0),
        op(Operation::Subtract),
        digit(4),
        Action::Equals,
    ]);
    assert_eq!(driver.display().current, "6");
    driver.press(Action::ClearAll);

    driver.press_all(&[digit(6), op(Operation::Multiply), digit(7), Action::Equals]);
    assert_eq!(driver.display().current, "42");
    driver.press(Action::ClearAll);

    driver.press_all(&[digit(7), op(Operation::Divide), digit(2), Action::Equals]);
    assert_eq!(driver.display().current, "3.5");
    driver.press(Action::ClearAll);
}

/// Verifies left-to-right chaining without precedence
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.press_all(&[digit(3), op(Operation::Add), digit(4)]);
    driver.press(op(Operation::Multiply));
    let mid = driver.display();
    assert_eq!(mid.current, "7");
    assert_eq!(mid.history, "7 ×");

    driver.press_all(&[digit(2), Action::Equals]);
    let done = driver.display();
    assert_eq!(done.current, "14");
    assert_eq!(done.history, "");
    driver.press(Action::ClearAll);
}

/// Verifies entry editing: decimal point, delete, sign, clear entry
pub fn verify_entry_editing<D: CalculatorDriver>(driver: &mut D) {
    driver.press_all(&[digit(1), Action::Decimal, digit(2), Action::Decimal, digit(5)]);
    assert_eq!(driver.display().current, "1.25");

    driver.press(Action::Delete);
    assert_eq!(driver.display().current, "1.2");

    driver.press(Action::ToggleSign);
    assert_eq!(driver.display().current, "-1.2");

    driver.press(Action::ClearEntry);
    assert_eq!(driver.display().current, "0");

    driver.press(Action::ToggleSign);
    assert_eq!(driver.display().current, "0");
    driver.press(Action::ClearAll);
}

/// Verifies thousands grouping on the current and history readouts
pub fn verify_grouping<D: CalculatorDriver>(driver: &mut D) {
    for d in [1, 2, 3, 4, 5, 6, 7] {
        driver.press(digit(d));
    }
    assert_eq!(driver.display().current, "1,234,567");

    driver.press(op(Operation::Add));
    assert_eq!(driver.display().history, "1,234,567 +");

    driver.press_all(&[digit(1), Action::Decimal, digit(5)]);
    assert_eq!(driver.display().current, "1.5");
    assert_eq!(
        driver.display().aria_label,
        "Calculator. 1,234,567 + 1.5"
    );
    driver.press(Action::ClearAll);
}

/// Verifies that division by zero shows NaN and a repeated equals is inert
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.press_all(&[digit(5), op(Operation::Divide), digit(0), Action::Equals]);
    assert_eq!(driver.display().current, "NaN");

    let before = driver.state().clone();
    driver.press(Action::Equals);
    assert_eq!(driver.state(), &before);

    driver.press(digit(8));
    assert_eq!(driver.display().current, "8");
    driver.press(Action::ClearAll);
}

/// Verifies that clear-all restores the initial state exactly
pub fn verify_clear_all<D: CalculatorDriver>(driver: &mut D) {
    driver.press_all(&[digit(9), op(Operation::Subtract), digit(3), Action::Decimal]);
    driver.press(Action::ClearAll);
    assert_eq!(driver.state(), &EngineState::new());
    assert_eq!(driver.display().current, "0");
    assert_eq!(driver.display().history, "");
}

/// Runs every scenario in sequence
pub fn verify_all<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_entry_editing(driver);
    verify_grouping(driver);
    verify_division_by_zero(driver);
    verify_clear_all(driver);
}
