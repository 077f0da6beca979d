// ABOUTME: Tests for logging configuration loaded from the environment
// ABOUTME: Covers RUST_LOG precedence, the LOG_LEVEL fallback and output format selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use pierre_planner::config::PlannerConfig;
use pierre_planner::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

fn clear_logging_env() {
    for key in ["RUST_LOG", "LOG_LEVEL", "LOG_FORMAT", "ENVIRONMENT"] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_log_level_drives_logging_without_rust_log() {
    clear_logging_env();
    env::set_var("LOG_LEVEL", "DEBUG");

    let logging = LoggingConfig::from_env();
    let config = PlannerConfig::from_env().unwrap();
    assert_eq!(logging.level, "debug");
    assert_eq!(logging.level, config.log_level.to_string());

    clear_logging_env();
}

#[test]
#[serial]
fn test_rust_log_takes_precedence() {
    clear_logging_env();
    env::set_var("LOG_LEVEL", "debug");
    env::set_var("RUST_LOG", "warn,pierre_planner=trace");

    assert_eq!(LoggingConfig::from_env().level, "warn,pierre_planner=trace");

    clear_logging_env();
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_logging_env();

    let logging = LoggingConfig::from_env();
    assert_eq!(logging.level, "info");
    assert_eq!(logging.format, LogFormat::Compact);

    env::set_var("LOG_FORMAT", "json");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Json);

    clear_logging_env();
}
