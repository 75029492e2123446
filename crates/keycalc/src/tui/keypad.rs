//! Clickable keypad for the terminal calculator
//!
//! Buttons follow the shared [`crate::layout`] grid. A button can be
//! clicked with the mouse and is highlighted while its press feedback is
//! active.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::Action;
use crate::layout::{self, COLS, ROWS};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The action this button performs
    pub action: Action,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a released button for `action`
    #[must_use]
    pub fn new(action: Action) -> Self {
        Self {
            action,
            pressed: false,
        }
    }

    /// Text printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        self.action.label()
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    fn style(&self) -> Style {
        if self.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match self.action {
            Action::Digit(_) | Action::Decimal => Style::default().fg(Color::White),
            Action::Operation(_) => Style::default().fg(Color::Yellow),
            Action::Equals => Style::default().fg(Color::Green),
            Action::ClearAll | Action::ClearEntry | Action::Delete => {
                Style::default().fg(Color::Red)
            }
            Action::ToggleSign => Style::default().fg(Color::Cyan),
        }
    }
}

/// The keypad - a 5x4 grid of buttons in row-major order
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = layout::positions()
            .map(|(_, action)| KeypadButton::new(action))
            .collect();
        Self { buttons }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (ROWS, COLS)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < ROWS && col < COLS {
            self.buttons.get(row * COLS + col)
        } else {
            None
        }
    }

    /// Index of the button that performs `action`
    #[must_use]
    pub fn find_button(&self, action: Action) -> Option<usize> {
        self.buttons.iter().position(|b| b.action == action)
    }

    /// Highlights a button by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases a button by index
    pub fn release_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(false);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons
            .iter()
            .enumerate()
            .map(|(i, btn)| ((i / COLS, i % COLS), btn))
    }

    /// Converts a click position inside `area` to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if area.width < 2 || area.height < 2 {
            return None;
        }
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / COLS as u16;
        let btn_height = (area.height - 2) / ROWS as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;
        (row < ROWS && col < COLS).then_some(row * COLS + col)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < COLS as u16 || inner.height < ROWS as u16 {
            return;
        }

        let btn_width = inner.width / COLS as u16;
        let btn_height = inner.height / ROWS as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let label = format!("[{}]", btn.label());
            let width = label.chars().count() as u16;
            if btn_width < width {
                continue;
            }
            let label_x = x + (btn_width - width) / 2;
            let label_y = y + btn_height / 2;

            if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                buf.set_span(label_x, label_y, &Span::styled(label, btn.style()), btn_width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;

    fn content(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    // ===== KeypadButton tests =====

    #[test]
    fn test_button_labels() {
        assert_eq!(KeypadButton::new(Action::digit(4).unwrap()).label(), "4");
        assert_eq!(KeypadButton::new(Action::ClearEntry).label(), "CE");
        assert_eq!(
            KeypadButton::new(Action::Operation(Operation::Multiply)).label(),
            "×"
        );
    }

    #[test]
    fn test_button_pressed_state() {
        let mut btn = KeypadButton::new(Action::Equals);
        assert!(!btn.pressed);
        btn.set_pressed(true);
        assert!(btn.pressed);
    }

    // ===== Keypad tests =====

    #[test]
    fn test_keypad_follows_layout() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), ROWS * COLS);
        assert_eq!(keypad.dimensions(), (5, 4));
        for ((row, col), action) in layout::positions() {
            assert_eq!(keypad.get_button_at(row, col).unwrap().action, action);
        }
        assert!(keypad.get_button_at(5, 0).is_none());
        assert!(keypad.get_button(20).is_none());
    }

    #[test]
    fn test_find_button() {
        let keypad = Keypad::new();
        assert_eq!(keypad.find_button(Action::ClearAll), Some(0));
        assert_eq!(keypad.find_button(Action::Equals), Some(19));
        assert_eq!(keypad.find_button(Action::digit(7).unwrap()), Some(4));
    }

    #[test]
    fn test_press_and_release() {
        let mut keypad = Keypad::new();
        keypad.press_button(3);
        keypad.press_button(3);
        keypad.press_button(8);
        assert_eq!(keypad.buttons().filter(|b| b.pressed).count(), 2);

        keypad.release_button(3);
        assert!(!keypad.get_button(3).unwrap().pressed);
        assert!(keypad.get_button(8).unwrap().pressed);

        keypad.release_all();
        assert!(keypad.buttons().all(|b| !b.pressed));
    }

    #[test]
    fn test_buttons_with_positions() {
        let keypad = Keypad::new();
        let positions: Vec<_> = keypad.buttons_with_positions().collect();
        assert_eq!(positions.len(), 20);
        assert_eq!(positions[0].0, (0, 0));
        assert_eq!(positions[19].0, (4, 3));
    }

    // ===== Hit testing =====

    #[test]
    fn test_hit_test_cells() {
        let keypad = Keypad::new();
        // 4 columns of 5, 5 rows of 2 inside the border
        let area = Rect::new(0, 0, 22, 12);
        assert_eq!(keypad.hit_test(area, 1, 1), Some(0));
        assert_eq!(keypad.hit_test(area, 20, 10), Some(19));
        assert_eq!(keypad.hit_test(area, 6, 3), Some(5));
    }

    #[test]
    fn test_hit_test_outside_and_border() {
        let keypad = Keypad::new();
        let area = Rect::new(10, 10, 22, 12);
        assert!(keypad.hit_test(area, 0, 0).is_none());
        assert!(keypad.hit_test(area, 100, 100).is_none());
        assert!(keypad.hit_test(area, 10, 10).is_none());
        assert!(keypad.hit_test(area, 31, 15).is_none());
    }

    #[test]
    fn test_hit_test_degenerate_area() {
        let keypad = Keypad::new();
        assert!(keypad.hit_test(Rect::new(0, 0, 0, 0), 0, 0).is_none());
        assert!(keypad.hit_test(Rect::new(0, 0, 4, 4), 1, 1).is_none());
    }

    // ===== KeypadWidget tests =====

    #[test]
    fn test_keypad_widget_render() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 26, 12);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad).render(area, &mut buf);

        let text = content(&buf);
        assert!(text.contains("Keypad"));
        assert!(text.contains("[7]"));
        assert!(text.contains("[CE]"));
        assert!(text.contains("[=]"));
    }

    #[test]
    fn test_keypad_widget_render_small() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 5, 5);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad).render(area, &mut buf);
        assert!(!content(&buf).contains("[7]"));
    }

    #[test]
    fn test_keypad_widget_render_pressed() {
        let mut keypad = Keypad::new();
        keypad.press_button(4);
        let area = Rect::new(0, 0, 26, 12);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad).render(area, &mut buf);

        let highlighted = buf
            .content()
            .iter()
            .filter(|c| c.bg == Color::Yellow)
            .map(|c| c.symbol())
            .collect::<String>();
        assert_eq!(highlighted, "[7]");
    }
}
