//! Terminal application state

use std::time::Instant;

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::trace;

use super::input::{InputHandler, KeyAction};
use super::keypad::Keypad;
use crate::config::CalcConfig;
use crate::core::{Action, DisplaySnapshot, EngineState, NumberFormat};
use crate::feedback::PressFeedback;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// Engine state behind the readouts
    state: EngineState,
    /// Display formatting
    format: NumberFormat,
    /// Clickable keypad
    keypad: Keypad,
    /// Highlight deadlines by button index
    feedback: PressFeedback<usize>,
    /// Key mapping
    input: InputHandler,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new(&CalcConfig::default())
    }
}

impl CalculatorApp {
    /// Creates an app from configuration
    #[must_use]
    pub fn new(config: &CalcConfig) -> Self {
        Self {
            state: EngineState::new(),
            format: config.number_format(),
            keypad: Keypad::new(),
            feedback: PressFeedback::new(config.press_duration()),
            input: InputHandler::new(),
            should_quit: false,
        }
    }

    /// Returns the engine state
    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// What the readouts show
    #[must_use]
    pub fn display(&self) -> DisplaySnapshot {
        self.state.snapshot(&self.format)
    }

    /// Applies an action and highlights its button
    pub fn apply(&mut self, action: Action, now: Instant) {
        if let Some(index) = self.keypad.find_button(action) {
            self.highlight(index, now);
        }
        self.state = std::mem::take(&mut self.state).dispatch(action);
    }

    /// Presses the keypad button at `index`
    pub fn click(&mut self, index: usize, now: Instant) {
        let Some(action) = self.keypad.get_button(index).map(|b| b.action) else {
            return;
        };
        self.apply(action, now);
    }

    /// Handles a key press
    pub fn handle_key(&mut self, event: KeyEvent, now: Instant) {
        match self.input.handle_key(event) {
            KeyAction::Calc(action) => self.apply(action, now),
            KeyAction::Quit => self.quit(),
            KeyAction::None => trace!(code = ?event.code, "unmapped key ignored"),
        }
    }

    /// Handles a mouse event over a keypad drawn in `keypad_area`
    pub fn handle_mouse(&mut self, event: MouseEvent, keypad_area: Rect, now: Instant) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(index) = self.keypad.hit_test(keypad_area, event.column, event.row) {
            self.click(index, now);
        }
    }

    /// Releases highlights whose deadline has passed
    pub fn tick(&mut self, now: Instant) {
        for index in self.feedback.expire(now) {
            self.keypad.release_button(index);
        }
    }

    fn highlight(&mut self, index: usize, now: Instant) {
        self.keypad.press_button(index);
        self.feedback.press(index, now);
    }
}
