//! What the two readouts show for a given state

use serde::{Deserialize, Serialize};

use super::engine::EngineState;
use super::format::NumberFormat;

/// Rendered text for one update of the output sink
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    /// Formatted current value
    pub current: String,
    /// Left operand and operator glyph, or empty
    pub history: String,
    /// Combined text for assistive technologies
    pub aria_label: String,
}

impl EngineState {
    /// Formatted current entry
    #[must_use]
    pub fn current_display(&self, format: &NumberFormat) -> String {
        format.format_entry(self.current_entry())
    }

    /// Left operand followed by the pending operator glyph
    #[must_use]
    pub fn history_preview(&self, format: &NumberFormat) -> String {
        let left = self
            .accumulated_value()
            .map(|v| format.format_value(v))
            .unwrap_or_default();
        let op = self
            .pending_operator()
            .map(|op| format!(" {} ", op.glyph()))
            .unwrap_or_default();
        format!("{left}{op}").trim().to_string()
    }

    /// Builds the full set of display strings
    #[must_use]
    pub fn snapshot(&self, format: &NumberFormat) -> DisplaySnapshot {
        let current = self.current_display(format);
        let history = self.history_preview(format);
        let aria_label = accessibility_summary(&history, &current);
        DisplaySnapshot {
            current,
            history,
            aria_label,
        }
    }
}

/// `Calculator.` followed by the non-empty readouts
#[must_use]
pub fn accessibility_summary(history: &str, current: &str) -> String {
    ["Calculator.", history, current]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
