//! Application configuration
//!
//! Loaded from an optional YAML file; every field has a default so a
//! partial file (or none at all) is fine.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::NumberFormat;
use crate::error::{CalcError, CalcResult};

/// Log verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - per-action logging
    Verbose,
    /// Debug - maximum output
    Debug,
}

impl Verbosity {
    /// Builds a verbosity from `-q` and the `-v` count
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug)
    }

    /// Default `tracing` filter directive for this level
    #[must_use]
    pub const fn filter(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "debug",
            Self::Debug => "trace",
        }
    }
}

/// Calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Thousands separator for the integer part, `null` disables grouping
    pub group_separator: Option<char>,
    /// How long a pressed key stays highlighted, in milliseconds
    pub press_feedback_ms: u64,
    /// Terminal event poll interval, in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            group_separator: Some(','),
            press_feedback_ms: 100,
            tick_rate_ms: 50,
        }
    }
}

impl CalcConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the group separator
    #[must_use]
    pub const fn with_group_separator(mut self, separator: Option<char>) -> Self {
        self.group_separator = separator;
        self
    }

    /// Set the press feedback duration
    #[must_use]
    pub const fn with_press_feedback_ms(mut self, ms: u64) -> Self {
        self.press_feedback_ms = ms;
        self
    }

    /// Set the terminal tick rate
    #[must_use]
    pub const fn with_tick_rate_ms(mut self, ms: u64) -> Self {
        self.tick_rate_ms = ms;
        self
    }

    /// Number format derived from this configuration
    #[must_use]
    pub const fn number_format(&self) -> NumberFormat {
        NumberFormat::new(self.group_separator)
    }

    /// Press feedback duration
    #[must_use]
    pub const fn press_duration(&self) -> Duration {
        Duration::from_millis(self.press_feedback_ms)
    }

    /// Terminal poll interval
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Checks values that would make the display or event loop misbehave
    pub fn validate(&self) -> CalcResult<()> {
        if let Some(sep) = self.group_separator {
            if sep.is_ascii_digit() || sep == '.' || sep == '-' {
                return Err(CalcError::config(format!(
                    "group_separator '{sep}' would be ambiguous in a number"
                )));
            }
        }
        if self.tick_rate_ms == 0 {
            return Err(CalcError::config("tick_rate_ms must be greater than zero"));
        }
        Ok(())
    }

    /// Parses and validates a YAML document
    pub fn from_yaml_str(yaml: &str) -> CalcResult<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file
    pub fn load(path: &Path) -> CalcResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Loads from `path` when given, otherwise returns the defaults
    pub fn load_or_default(path: Option<&Path>) -> CalcResult<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Renders the configuration as YAML
    pub fn to_yaml(&self) -> CalcResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}
