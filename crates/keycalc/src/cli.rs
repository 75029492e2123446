//! Command-line interface definitions and the headless commands

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::config::{CalcConfig, Verbosity};
use crate::core::{Action, EngineState};
use crate::error::CalcResult;
use crate::web::key_to_action;

/// keycalc: a button- and keyboard-driven calculator
#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// YAML configuration file
    #[arg(long, global = true, env = "KEYCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (the terminal UI logs nowhere otherwise)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Verbosity selected by `-q` and `-v`
    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive terminal calculator
    Run,

    /// Replay key presses and print the display
    Eval(EvalArgs),

    /// Print the effective configuration as YAML
    Config,
}

/// Arguments for the eval command
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Keys to press: `Enter`, `Backspace`, `Escape`, or strings whose
    /// characters are each one key (e.g. `12+3=`); put `--` before keys
    /// starting with `-`
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Print the display snapshot as JSON
    #[arg(long)]
    pub json: bool,
}

/// Decodes key arguments into actions, skipping keys with no binding
#[must_use]
pub fn parse_keys(keys: &[String]) -> Vec<Action> {
    let mut actions = Vec::new();
    for arg in keys {
        if let Some(action) = key_to_action(arg).filter(|_| arg.chars().count() > 1) {
            actions.push(action);
            continue;
        }
        for c in arg.chars() {
            match key_to_action(c.encode_utf8(&mut [0; 4])) {
                Some(action) => actions.push(action),
                None => debug!(key = %c, "unmapped key skipped"),
            }
        }
    }
    actions
}

/// Runs the eval command and returns what it prints
pub fn run_eval(config: &CalcConfig, args: &EvalArgs) -> CalcResult<String> {
    let actions = parse_keys(&args.keys);
    debug!(count = actions.len(), "replaying key presses");
    let state = EngineState::new().dispatch_all(actions);
    let snapshot = state.snapshot(&config.number_format());

    if args.json {
        return Ok(serde_json::to_string_pretty(&snapshot)?);
    }
    if snapshot.history.is_empty() {
        Ok(snapshot.current)
    } else {
        Ok(format!("{}\n{}", snapshot.history, snapshot.current))
    }
}

/// Runs the config command and returns what it prints
pub fn run_config(config: &CalcConfig) -> CalcResult<String> {
    config.to_yaml()
}
