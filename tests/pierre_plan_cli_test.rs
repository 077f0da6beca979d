// ABOUTME: Integration tests for the pierre-plan binary
// ABOUTME: Tests JSON output on stdout, error envelopes on stderr and exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Integration tests for the pierre-plan binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::process::Command;

use serde_json::Value;

/// Helper to run the CLI and capture output
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_pierre-plan"))
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

fn last_json_line(text: &str) -> Value {
    let line = text
        .lines()
        .rev()
        .find(|line| line.starts_with('{'))
        .unwrap();
    serde_json::from_str(line).unwrap()
}

#[test]
fn test_cli_help_shows_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0);
    for command in ["generate", "vdot", "paces", "predict"] {
        assert!(stdout.contains(command), "help should mention '{command}'");
    }
}

#[test]
fn test_vdot_command() {
    let (exit_code, stdout, _stderr) = run_cli(&["vdot", "--distance", "5K", "--time", "20:00"]);

    assert_eq!(exit_code, 0);
    let value: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["vdot"], 52.0);
    assert_eq!(value["paces"]["easy"], "5:08-5:38");
}

#[test]
fn test_predict_command() {
    let (exit_code, stdout, _stderr) =
        run_cli(&["predict", "--vdot", "52", "--distance", "full"]);

    assert_eq!(exit_code, 0);
    let value: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["time"], "3:05:00");
}

#[test]
fn test_generate_summary() {
    let (exit_code, stdout, _stderr) = run_cli(&[
        "generate",
        "--race-date",
        "2025-04-28",
        "--distance",
        "half",
        "--today",
        "2025-01-06",
        "--summary",
    ]);

    assert_eq!(exit_code, 0);
    let value: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["totalWeeks"], 16);
}

#[test]
fn test_past_race_exits_with_validation_code() {
    let (exit_code, stdout, stderr) = run_cli(&[
        "generate",
        "--race-date",
        "2025-01-01",
        "--distance",
        "10K",
        "--today",
        "2025-01-06",
    ]);

    assert_eq!(exit_code, 2);
    assert!(stdout.is_empty());
    let value = last_json_line(&stderr);
    assert_eq!(value["error"]["code"], "VALUE_OUT_OF_RANGE");
}

#[test]
fn test_bad_time_exits_with_validation_code() {
    let (exit_code, _stdout, stderr) = run_cli(&["vdot", "--distance", "10K", "--time", "4x:00"]);

    assert_eq!(exit_code, 2);
    assert_eq!(last_json_line(&stderr)["error"]["code"], "INVALID_FORMAT");
}

#[test]
fn test_malformed_arguments_are_usage_errors() {
    let (exit_code, _stdout, stderr) = run_cli(&["paces", "--vdot"]);
    assert_ne!(exit_code, 0);
    assert!(!stderr.is_empty());

    let (exit_code, _stdout, _stderr) =
        run_cli(&["predict", "--vdot", "50", "--distance", "ultra"]);
    assert_ne!(exit_code, 0);
}
