//! Calculator engine: state, transitions and display formatting
//!
//! Nothing in here performs I/O or depends on a frontend. Frontends own an
//! [`EngineState`], feed it [`Action`]s and render a [`DisplaySnapshot`].

mod action;
mod display;
mod engine;
pub mod format;
mod operations;

pub use action::Action;
pub use display::{accessibility_summary, DisplaySnapshot};
pub use engine::{Digit, EngineState};
pub use format::{display_string, numeric_value, NumberFormat};
pub use operations::{apply, Operation};
