// ABOUTME: Unit tests for planner environment configuration
// ABOUTME: Validates PLANNER_* variable loading, fallbacks on bad values and range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use pierre_planner::config::environment::{
    Environment, LogLevel, PlannerConfig, PlannerDefaults, PlannerLimits,
};
use pierre_planner::errors::ErrorCode;
use serial_test::serial;

const PLANNER_VARS: [&str; 10] = [
    "PLANNER_DEFAULT_WEEKLY_KM",
    "PLANNER_DEFAULT_DAYS_PER_WEEK",
    "PLANNER_DEFAULT_RUNNING_AGE_MONTHS",
    "PLANNER_DEFAULT_HOURS_PER_SESSION",
    "PLANNER_MIN_DAYS_PER_WEEK",
    "PLANNER_MAX_DAYS_PER_WEEK",
    "PLANNER_MIN_WEEKLY_KM",
    "PLANNER_MAX_WEEKLY_KM",
    "PLANNER_MIN_RUNNING_AGE_MONTHS",
    "PLANNER_MAX_RUNNING_AGE_MONTHS",
];

fn clear_planner_env() {
    for key in PLANNER_VARS {
        env::remove_var(key);
    }
    env::remove_var("ENVIRONMENT");
    env::remove_var("LOG_LEVEL");
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info);
    assert_eq!(LogLevel::Debug.to_string(), "debug");
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("testing"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
    assert!(!Environment::Development.is_testing());
}

#[test]
#[serial]
fn test_from_env_uses_defaults_when_unset() {
    clear_planner_env();

    let config = PlannerConfig::from_env().unwrap();
    assert_eq!(config.defaults, PlannerDefaults::default());
    assert_eq!(config.limits, PlannerLimits::default());
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
#[serial]
fn test_from_env_reads_overrides() {
    clear_planner_env();
    env::set_var("ENVIRONMENT", "production");
    env::set_var("PLANNER_DEFAULT_WEEKLY_KM", "42.5");
    env::set_var("PLANNER_DEFAULT_DAYS_PER_WEEK", "5");
    env::set_var("PLANNER_MAX_DAYS_PER_WEEK", "5");
    env::set_var("PLANNER_MAX_WEEKLY_KM", "150");

    let config = PlannerConfig::from_env().unwrap();
    assert_eq!(config.environment, Environment::Production);
    assert!((config.defaults.weekly_km - 42.5).abs() < f64::EPSILON);
    assert_eq!(config.defaults.days_per_week, 5);
    assert_eq!(config.limits.max_days_per_week, 5);
    assert_eq!(config.limits.clamp_days(6), 5);
    assert!((config.limits.clamp_weekly_km(180.0) - 150.0).abs() < f64::EPSILON);
    assert!(config.summary().contains("environment=production"));

    clear_planner_env();
}

#[test]
#[serial]
fn test_unparseable_values_fall_back() {
    clear_planner_env();
    env::set_var("PLANNER_DEFAULT_WEEKLY_KM", "lots");
    env::set_var("PLANNER_MAX_DAYS_PER_WEEK", "-3");
    env::set_var("LOG_LEVEL", "chatty");

    let config = PlannerConfig::from_env().unwrap();
    assert!((config.defaults.weekly_km - 30.0).abs() < f64::EPSILON);
    assert_eq!(config.limits.max_days_per_week, 6);
    assert_eq!(config.log_level, LogLevel::Info);

    clear_planner_env();
}

#[test]
#[serial]
fn test_inverted_limits_fail_to_load() {
    clear_planner_env();
    env::set_var("PLANNER_MIN_DAYS_PER_WEEK", "6");
    env::set_var("PLANNER_MAX_DAYS_PER_WEEK", "4");

    let err = PlannerConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert_eq!(err.code.exit_code(), 3);

    clear_planner_env();
}

#[test]
#[serial]
fn test_non_positive_default_volume_fails_to_load() {
    clear_planner_env();
    env::set_var("PLANNER_DEFAULT_WEEKLY_KM", "0");

    let err = PlannerConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);

    clear_planner_env();
}

#[test]
fn test_validate_rejects_eight_training_days() {
    let mut config = PlannerConfig::default();
    config.limits.max_days_per_week = 8;
    assert_eq!(
        config.validate().unwrap_err().code,
        ErrorCode::ConfigInvalid
    );
}
