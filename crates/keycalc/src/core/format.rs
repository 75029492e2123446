//! Display formatting for the calculator readouts
//!
//! Two conversions live here:
//! - [`display_string`] turns a computed `f64` back into an entry literal
//! - [`NumberFormat::format_entry`] groups the integer part of an entry for
//!   display while keeping any typed fractional digits verbatim

use serde::{Deserialize, Serialize};

/// Entry literals that are shown exactly as stored
const SENTINELS: [&str; 3] = ["Infinity", "-Infinity", "NaN"];

/// Converts a computed value into the literal stored as the current entry
///
/// Non-finite values map to `NaN`, `Infinity` and `-Infinity`; negative zero
/// collapses to `0`. Everything else uses the shortest round-trip form.
#[must_use]
pub fn display_string(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}

/// Parses an entry literal; unparsable text reads as NaN
#[must_use]
pub fn numeric_value(entry: &str) -> f64 {
    entry.parse::<f64>().unwrap_or(f64::NAN)
}

/// Thousands-grouping rules for the integer part of a displayed number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    /// Separator inserted between groups of three digits, `None` disables grouping
    pub group_separator: Option<char>,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            group_separator: Some(','),
        }
    }
}

impl NumberFormat {
    /// Creates a format with the given separator
    #[must_use]
    pub const fn new(group_separator: Option<char>) -> Self {
        Self { group_separator }
    }

    /// Creates a format that never groups digits
    #[must_use]
    pub const fn ungrouped() -> Self {
        Self {
            group_separator: None,
        }
    }

    /// Formats an entry literal for the current-value display
    #[must_use]
    pub fn format_entry(&self, entry: &str) -> String {
        if SENTINELS.contains(&entry) {
            return entry.to_string();
        }
        match entry.split_once('.') {
            None => self.format_integer(entry),
            Some((int_part, frac_part)) => {
                format!("{}.{frac_part}", self.format_integer(int_part))
            }
        }
    }

    /// Formats a computed value (used for the left operand in the history line)
    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        self.format_entry(&display_string(value))
    }

    /// Renders an integer literal rounded to zero fraction digits, grouped
    fn format_integer(&self, text: &str) -> String {
        let value = if text.is_empty() {
            0.0
        } else {
            numeric_value(text)
        };
        if !value.is_finite() {
            return display_string(value);
        }

        let digits = display_string(value.abs().round());
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if value.is_sign_negative() {
            out.push('-');
        }
        match self.group_separator {
            None => out.push_str(&digits),
            Some(sep) => {
                let len = digits.len();
                for (i, ch) in digits.chars().enumerate() {
                    if i > 0 && (len - i) % 3 == 0 {
                        out.push(sep);
                    }
                    out.push(ch);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== display_string tests =====

    #[test]
    fn test_display_string_integer() {
        assert_eq!(display_string(14.0), "14");
        assert_eq!(display_string(-42.0), "-42");
    }

    #[test]
    fn test_display_string_fraction() {
        assert_eq!(display_string(0.5), "0.5");
        assert_eq!(display_string(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_display_string_sentinels() {
        assert_eq!(display_string(f64::NAN), "NaN");
        assert_eq!(display_string(f64::INFINITY), "Infinity");
        assert_eq!(display_string(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_display_string_negative_zero() {
        assert_eq!(display_string(-0.0), "0");
    }

    // ===== numeric_value tests =====

    #[test]
    fn test_numeric_value_partial_literals() {
        assert_eq!(numeric_value("0."), 0.0);
        assert_eq!(numeric_value("12."), 12.0);
        assert_eq!(numeric_value("-3.25"), -3.25);
    }

    #[test]
    fn test_numeric_value_sentinels() {
        assert!(numeric_value("NaN").is_nan());
        assert!(numeric_value("-NaN").is_nan());
        assert_eq!(numeric_value("Infinity"), f64::INFINITY);
        assert_eq!(numeric_value("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_numeric_value_garbage_is_nan() {
        assert!(numeric_value("").is_nan());
        assert!(numeric_value("1.2.3").is_nan());
    }

    // ===== format_entry tests =====

    #[test]
    fn test_format_groups_integer() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.format_entry("1234567"), "1,234,567");
        assert_eq!(fmt.format_entry("999"), "999");
        assert_eq!(fmt.format_entry("1000"), "1,000");
        assert_eq!(fmt.format_entry("0"), "0");
    }

    #[test]
    fn test_format_keeps_fraction_verbatim() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.format_entry("1234.5"), "1,234.5");
        assert_eq!(fmt.format_entry("1234.50000"), "1,234.50000");
        assert_eq!(fmt.format_entry("0."), "0.");
    }

    #[test]
    fn test_format_negative() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.format_entry("-9876543"), "-9,876,543");
        assert_eq!(fmt.format_entry("-0.5"), "-0.5");
    }

    #[test]
    fn test_format_sentinels_verbatim() {
        let fmt = NumberFormat::default();
        for s in SENTINELS {
            assert_eq!(fmt.format_entry(s), s);
        }
    }

    #[test]
    fn test_format_negated_nan_renders_nan() {
        assert_eq!(NumberFormat::default().format_entry("-NaN"), "NaN");
    }

    #[test]
    fn test_format_long_entry_groups_shortest_digits() {
        let fmt = NumberFormat::default();
        assert_eq!(
            fmt.format_entry("12345678901234567890"),
            "12,345,678,901,234,567,000"
        );
        assert_eq!(
            fmt.format_entry("9999999999800000000000"),
            "9,999,999,999,800,000,000,000"
        );
    }

    #[test]
    fn test_format_custom_separator() {
        let fmt = NumberFormat::new(Some('.'));
        assert_eq!(fmt.format_entry("1234567"), "1.234.567");
    }

    #[test]
    fn test_format_ungrouped() {
        let fmt = NumberFormat::ungrouped();
        assert_eq!(fmt.format_entry("1234567.25"), "1234567.25");
    }

    #[test]
    fn test_format_value() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.format_value(12345.0), "12,345");
        assert_eq!(fmt.format_value(f64::NAN), "NaN");
    }
}
