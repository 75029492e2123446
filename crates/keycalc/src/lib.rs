//! keycalc - button- and keyboard-driven calculator engine
//!
//! A pure state machine for a four-function calculator with immediate
//! left-to-right evaluation, plus the adapters that drive it: a terminal
//! UI, a mock-DOM model of the browser page, and a headless CLI.
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let digit = |d| Action::digit(d).unwrap();
//! let state = EngineState::new().dispatch_all([
//!     digit(3),
//!     Action::Operation(Operation::Add),
//!     digit(4),
//!     Action::Operation(Operation::Multiply),
//!     digit(2),
//!     Action::Equals,
//! ]);
//!
//! // No precedence: (3 + 4) * 2
//! assert_eq!(state.current_entry(), "14");
//! assert_eq!(state.snapshot(&NumberFormat::default()).aria_label, "Calculator. 14");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod cli;
pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod feedback;
pub mod layout;
pub mod telemetry;

#[cfg(feature = "tui")]
pub mod tui;

/// Browser page model - always available
/// (the mock DOM allows testing without browser bindings)
pub mod web;

pub use config::{CalcConfig, Verbosity};
pub use error::{CalcError, CalcResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::CalcConfig;
    pub use crate::core::{
        Action, Digit, DisplaySnapshot, EngineState, NumberFormat, Operation,
    };
    pub use crate::driver::{CalculatorDriver, DisplaySink};
    pub use crate::error::{CalcError, CalcResult};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::web::{DomEvent, WebCalculator, WebDriver};
}
