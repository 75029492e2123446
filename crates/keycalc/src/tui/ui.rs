//! Terminal rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Title of the outer frame
pub const TITLE: &str = " keycalc ";

/// Key bindings shown in the help sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Enter number"),
    ("+-*/", "Operator"),
    ("Enter =", "Equals"),
    ("Bksp", "Delete"),
    ("Esc", "Clear all"),
    ("Mouse", "Press key"),
    ("Ctrl+C", "Quit"),
];

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Where the keypad is drawn for a frame of size `area`
///
/// Mouse events are hit-tested against this rectangle.
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    horizontal_layout(area)[1]
}

fn horizontal_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(24),    // Readouts
            Constraint::Length(26), // Keypad
            Constraint::Length(22), // Help sidebar
        ])
        .split(area)
        .to_vec()
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn readout_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // History
                Constraint::Length(3), // Current
                Constraint::Min(3),    // Screen reader label
            ])
            .split(area)
            .to_vec()
    }

    fn render_readouts(&self, area: Rect, buf: &mut Buffer) {
        let snapshot = self.app.display();
        let chunks = Self::readout_layout(area);

        Paragraph::new(Span::styled(
            snapshot.history,
            Style::default().fg(Color::Gray),
        ))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(" History ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .render(chunks[0], buf);

        let current_style = if snapshot.current == "NaN" || snapshot.current.ends_with("Infinity")
        {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };
        Paragraph::new(Span::styled(snapshot.current, current_style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Current ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(chunks[1], buf);

        Paragraph::new(Span::styled(
            snapshot.aria_label,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Announce ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(chunks[2], buf);
    }

    fn render_help_sidebar(area: Rect, buf: &mut Buffer) {
        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let chunks = horizontal_layout(area);
        self.render_readouts(chunks[0], buf);
        KeypadWidget::new(self.app.keypad()).render(chunks[1], buf);
        Self::render_help_sidebar(chunks[2], buf);
    }
}
