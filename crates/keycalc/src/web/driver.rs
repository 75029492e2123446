//! Web driver for the shared calculator scenarios
//!
//! Presses go through button clicks on the page and the display is read
//! back from the rendered DOM, not from the engine.

use std::time::Instant;

use super::dom::DomEvent;
use super::page::WebCalculator;
use crate::config::CalcConfig;
use crate::core::{Action, DisplaySnapshot, EngineState};
use crate::driver::CalculatorDriver;

/// Drives a [`WebCalculator`] by clicking its keypad
#[derive(Debug, Default)]
pub struct WebDriver {
    page: WebCalculator,
}

impl WebDriver {
    /// Creates a driver over a default page
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver over a page built from `config`
    #[must_use]
    pub fn with_config(config: &CalcConfig) -> Self {
        Self {
            page: WebCalculator::new(config),
        }
    }

    /// The page under test
    #[must_use]
    pub fn page(&self) -> &WebCalculator {
        &self.page
    }

    /// Types one key on the page keyboard
    pub fn type_key(&mut self, key: &str) -> Option<Action> {
        self.page.handle_event(DomEvent::key_down(key), Instant::now())
    }
}

impl CalculatorDriver for WebDriver {
    fn press(&mut self, action: Action) {
        let Some(id) = self
            .page
            .keypad()
            .find_button_by_action(action)
            .map(|b| b.id.clone())
        else {
            return;
        };
        let now = Instant::now();
        self.page.handle_event(DomEvent::click(&id), now);
        self.page.tick(now);
    }

    fn display(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            current: self.page.current_text().to_string(),
            history: self.page.history_text().to_string(),
            aria_label: self.page.aria_label().to_string(),
        }
    }

    fn state(&self) -> &EngineState {
        self.page.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{
        verify_all, verify_basic_arithmetic, verify_chaining, verify_clear_all,
        verify_division_by_zero, verify_entry_editing, verify_grouping,
    };

    #[test]
    fn test_web_driver_new() {
        let driver = WebDriver::new();
        assert_eq!(driver.display().current, "0");
        assert_eq!(driver.display().history, "");
    }

    #[test]
    fn test_rendered_dom_matches_engine_snapshot() {
        let mut driver = WebDriver::new();
        driver.press_all(&[
            Action::digit(8).unwrap(),
            Action::digit(8).unwrap(),
            Action::digit(8).unwrap(),
            Action::digit(8).unwrap(),
            Action::Operation(crate::core::Operation::Divide),
        ]);
        assert_eq!(driver.display(), driver.page().snapshot());
    }

    #[test]
    fn test_type_key() {
        let mut driver = WebDriver::new();
        assert!(driver.type_key("7").is_some());
        assert!(driver.type_key("q").is_none());
        assert_eq!(driver.display().current, "7");
    }

    #[test]
    fn test_web_basic_arithmetic() {
        verify_basic_arithmetic(&mut WebDriver::new());
    }

    #[test]
    fn test_web_chaining() {
        verify_chaining(&mut WebDriver::new());
    }

    #[test]
    fn test_web_entry_editing() {
        verify_entry_editing(&mut WebDriver::new());
    }

    #[test]
    fn test_web_grouping() {
        verify_grouping(&mut WebDriver::new());
    }

    #[test]
    fn test_web_division_by_zero() {
        verify_division_by_zero(&mut WebDriver::new());
    }

    #[test]
    fn test_web_clear_all() {
        verify_clear_all(&mut WebDriver::new());
    }

    #[test]
    fn test_web_full_run() {
        verify_all(&mut WebDriver::new());
    }
}
