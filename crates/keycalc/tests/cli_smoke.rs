//! Smoke tests for the keycalc CLI

#![cfg(feature = "tui")]
#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn keycalc() -> Command {
    let mut cmd = Command::cargo_bin("keycalc").expect("keycalc binary should exist");
    cmd.env_remove("KEYCALC_CONFIG").env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_help_flag() {
    keycalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("eval"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version_flag() {
    keycalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_args_fails() {
    keycalc().assert().failure();
}

// ============================================================================
// eval
// ============================================================================

#[test]
fn test_eval_left_to_right() {
    keycalc()
        .args(["eval", "3+4*2="])
        .assert()
        .success()
        .stdout("14\n");
}

#[test]
fn test_eval_named_keys() {
    keycalc()
        .args(["eval", "99", "Backspace", "+1", "Enter"])
        .assert()
        .success()
        .stdout("10\n");
}

#[test]
fn test_eval_pending_prints_history() {
    keycalc()
        .args(["eval", "1234567-"])
        .assert()
        .success()
        .stdout("1,234,567 -\n1,234,567\n");
}

#[test]
fn test_eval_division_by_zero() {
    keycalc()
        .args(["eval", "5/0="])
        .assert()
        .success()
        .stdout("NaN\n");
}

#[test]
fn test_eval_json() {
    let output = keycalc()
        .args(["eval", "7/2=", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["current"], "3.5");
    assert_eq!(value["history"], "");
    assert_eq!(value["aria_label"], "Calculator. 3.5");
}

#[test]
fn test_eval_requires_keys() {
    keycalc().arg("eval").assert().failure();
}

// ============================================================================
// config
// ============================================================================

#[test]
fn test_config_prints_defaults() {
    keycalc()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("press_feedback_ms: 100"))
        .stdout(predicate::str::contains("tick_rate_ms: 50"));
}

#[test]
fn test_config_file_changes_grouping() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keycalc.yaml");
    fs::write(&path, "group_separator: \" \"\n").unwrap();

    keycalc()
        .args(["eval", "1000000", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout("1 000 000\n");
}

#[test]
fn test_config_file_from_env() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keycalc.yaml");
    fs::write(&path, "group_separator: null\n").unwrap();

    keycalc()
        .env("KEYCALC_CONFIG", &path)
        .args(["eval", "1000000"])
        .assert()
        .success()
        .stdout("1000000\n");
}

#[test]
fn test_missing_config_file_fails() {
    keycalc()
        .args(["config", "--config", "/nonexistent/keycalc.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn test_invalid_config_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keycalc.yaml");
    fs::write(&path, "tick_rate_ms: 0\n").unwrap();

    keycalc()
        .args(["config", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_log_file_receives_events() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("keycalc.log");

    keycalc()
        .args(["-vv", "eval", "1+1="])
        .arg("--log-file")
        .arg(&log)
        .assert()
        .success()
        .stdout("2\n");

    let contents = fs::read_to_string(&log).unwrap();
    assert!(contents.contains("replaying key presses"));
}

#[test]
fn test_quiet_keeps_stderr_clean() {
    keycalc()
        .args(["-q", "eval", "2+2="])
        .assert()
        .success()
        .stdout("4\n")
        .stderr(predicate::str::is_empty());
}
