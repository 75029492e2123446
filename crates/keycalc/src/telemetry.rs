//! Tracing setup for the `keycalc` binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the binary (or an embedding application).

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;
use crate::error::{CalcError, CalcResult};

/// Builds the filter: `RUST_LOG` when set, otherwise the verbosity default
fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.filter()))
}

/// Installs a compact `fmt` subscriber writing to stderr.
///
/// Returns `false` if a global subscriber was already set.
#[must_use]
pub fn init_stderr_tracing(verbosity: Verbosity) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .is_ok()
}

/// Installs a compact `fmt` subscriber appending to `path`.
///
/// Used by the interactive terminal mode, where stderr output would corrupt
/// the screen.
pub fn init_file_tracing(verbosity: Verbosity, path: &Path) -> CalcResult<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .compact()
        .try_init()
        .map_err(|e| CalcError::telemetry(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_file_tracing_rejects_unwritable_path() {
        let err = init_file_tracing(Verbosity::Normal, Path::new("/nonexistent-dir/keycalc.log"))
            .unwrap_err();
        assert!(matches!(err, CalcError::Io(_)));
    }

    #[test]
    fn test_second_init_reports_already_set() {
        // Whichever test installs first wins; afterwards init must not panic.
        let _ = init_stderr_tracing(Verbosity::Quiet);
        assert!(!init_stderr_tracing(Verbosity::Quiet));
    }
}
