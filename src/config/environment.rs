// ABOUTME: Environment configuration for planner defaults, input limits and log settings
// ABOUTME: Reads PLANNER_* variables with typed fallbacks and validates the resulting ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::{AppError, AppResult};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Read and parse an environment variable, falling back to `default`
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Accept the outcome of loading a `.env` file
///
/// A missing file is fine; a file that exists but does not parse is a
/// `ConfigError`.
fn apply_dotenv(loaded: Result<PathBuf, dotenvy::Error>) -> AppResult<()> {
    match loaded {
        Ok(path) => {
            debug!(path = %path.display(), "Loaded .env file");
            Ok(())
        }
        Err(e) if e.not_found() => {
            debug!("No .env file loaded: {}", e);
            Ok(())
        }
        Err(e) => Err(AppError::config(format!("Cannot load .env file: {e}")).with_source(e)),
    }
}

/// Values applied when a plan request leaves a field out
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannerDefaults {
    /// Current weekly kilometres
    pub weekly_km: f64,
    /// Training days per week
    pub days_per_week: u8,
    /// Months of regular running
    pub running_age_months: u32,
    /// Hours available per session
    pub hours_per_session: f64,
}

impl Default for PlannerDefaults {
    fn default() -> Self {
        Self {
            weekly_km: 30.0,
            days_per_week: 4,
            running_age_months: 12,
            hours_per_session: 1.0,
        }
    }
}

impl PlannerDefaults {
    /// Load defaults from `PLANNER_DEFAULT_*` variables
    #[must_use]
    pub fn from_env() -> Self {
        let fallback = Self::default();
        Self {
            weekly_km: env_or("PLANNER_DEFAULT_WEEKLY_KM", fallback.weekly_km),
            days_per_week: env_or("PLANNER_DEFAULT_DAYS_PER_WEEK", fallback.days_per_week),
            running_age_months: env_or(
                "PLANNER_DEFAULT_RUNNING_AGE_MONTHS",
                fallback.running_age_months,
            ),
            hours_per_session: env_or(
                "PLANNER_DEFAULT_HOURS_PER_SESSION",
                fallback.hours_per_session,
            ),
        }
    }
}

/// Accepted ranges for athlete inputs; values outside are clamped
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannerLimits {
    /// Fewest training days per week
    pub min_days_per_week: u8,
    /// Most training days per week
    pub max_days_per_week: u8,
    /// Lowest weekly kilometres
    pub min_weekly_km: f64,
    /// Highest weekly kilometres
    pub max_weekly_km: f64,
    /// Shortest running history in months
    pub min_running_age_months: u32,
    /// Longest running history in months
    pub max_running_age_months: u32,
}

impl Default for PlannerLimits {
    fn default() -> Self {
        Self {
            min_days_per_week: 3,
            max_days_per_week: 6,
            min_weekly_km: 10.0,
            max_weekly_km: 200.0,
            min_running_age_months: 1,
            max_running_age_months: 360,
        }
    }
}

impl PlannerLimits {
    /// Load limits from `PLANNER_MIN_*` / `PLANNER_MAX_*` variables
    #[must_use]
    pub fn from_env() -> Self {
        let fallback = Self::default();
        Self {
            min_days_per_week: env_or("PLANNER_MIN_DAYS_PER_WEEK", fallback.min_days_per_week),
            max_days_per_week: env_or("PLANNER_MAX_DAYS_PER_WEEK", fallback.max_days_per_week),
            min_weekly_km: env_or("PLANNER_MIN_WEEKLY_KM", fallback.min_weekly_km),
            max_weekly_km: env_or("PLANNER_MAX_WEEKLY_KM", fallback.max_weekly_km),
            min_running_age_months: env_or(
                "PLANNER_MIN_RUNNING_AGE_MONTHS",
                fallback.min_running_age_months,
            ),
            max_running_age_months: env_or(
                "PLANNER_MAX_RUNNING_AGE_MONTHS",
                fallback.max_running_age_months,
            ),
        }
    }

    /// Clamp training days per week
    #[must_use]
    pub fn clamp_days(&self, days: u8) -> u8 {
        days.clamp(self.min_days_per_week, self.max_days_per_week)
    }

    /// Clamp weekly kilometres
    #[must_use]
    pub fn clamp_weekly_km(&self, weekly_km: f64) -> f64 {
        weekly_km.clamp(self.min_weekly_km, self.max_weekly_km)
    }

    /// Clamp running history in months
    #[must_use]
    pub fn clamp_running_age(&self, months: u32) -> u32 {
        months.clamp(self.min_running_age_months, self.max_running_age_months)
    }
}

/// Planner configuration loaded from the environment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Defaults for missing request fields
    pub defaults: PlannerDefaults,
    /// Input clamps
    pub limits: PlannerLimits,
}

impl PlannerConfig {
    /// Load configuration from environment variables and an optional `.env` file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a `.env` file exists but cannot be parsed, and
    /// `ConfigInvalid` when the loaded limits or defaults are inconsistent
    pub fn from_env() -> AppResult<Self> {
        apply_dotenv(dotenvy::dotenv())?;

        let config = Self {
            environment: Environment::from_str_or_default(
                &env::var("ENVIRONMENT").unwrap_or_default(),
            ),
            log_level: LogLevel::from_str_or_default(&env::var("LOG_LEVEL").unwrap_or_default()),
            defaults: PlannerDefaults::from_env(),
            limits: PlannerLimits::from_env(),
        };

        config.validate()?;
        info!(
            environment = %config.environment,
            days = ?(config.limits.min_days_per_week, config.limits.max_days_per_week),
            weekly_km = ?(config.limits.min_weekly_km, config.limits.max_weekly_km),
            "Planner configuration loaded"
        );
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a range is empty or not positive, or a
    /// default is not usable
    pub fn validate(&self) -> AppResult<()> {
        let limits = &self.limits;

        if limits.min_days_per_week == 0 || limits.max_days_per_week > 7 {
            return Err(AppError::config_invalid(format!(
                "Days per week limits must lie within 1..=7, got {}..={}",
                limits.min_days_per_week, limits.max_days_per_week
            )));
        }
        if limits.min_days_per_week > limits.max_days_per_week {
            return Err(AppError::config_invalid(
                "PLANNER_MIN_DAYS_PER_WEEK cannot exceed PLANNER_MAX_DAYS_PER_WEEK",
            ));
        }
        if !(limits.min_weekly_km > 0.0 && limits.min_weekly_km <= limits.max_weekly_km) {
            return Err(AppError::config_invalid(format!(
                "Weekly km limits must be positive and ordered, got {}..={}",
                limits.min_weekly_km, limits.max_weekly_km
            )));
        }
        if limits.min_running_age_months == 0
            || limits.min_running_age_months > limits.max_running_age_months
        {
            return Err(AppError::config_invalid(format!(
                "Running age limits must be positive and ordered, got {}..={}",
                limits.min_running_age_months, limits.max_running_age_months
            )));
        }
        if !(self.defaults.weekly_km.is_finite() && self.defaults.weekly_km > 0.0) {
            return Err(AppError::config_invalid(
                "PLANNER_DEFAULT_WEEKLY_KM must be a positive number",
            ));
        }
        if !(self.defaults.hours_per_session.is_finite() && self.defaults.hours_per_session > 0.0)
        {
            return Err(AppError::config_invalid(
                "PLANNER_DEFAULT_HOURS_PER_SESSION must be a positive number",
            ));
        }

        Ok(())
    }

    /// One-line summary for logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Pierre Planner Configuration: environment={}, log_level={}, days={}..={}, \
             weekly_km={}..={}, defaults=({} km, {} days, {} months)",
            self.environment,
            self.log_level,
            self.limits.min_days_per_week,
            self.limits.max_days_per_week,
            self.limits.min_weekly_km,
            self.limits.max_weekly_km,
            self.defaults.weekly_km,
            self.defaults.days_per_week,
            self.defaults.running_age_months,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_fallback() {
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("verbose"), LogLevel::Info);
        assert_eq!(LogLevel::Warn.to_string(), "warn");
    }

    #[test]
    fn test_environment_aliases() {
        assert_eq!(Environment::from_str_or_default("prod"), Environment::Production);
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(Environment::from_str_or_default(""), Environment::Development);
    }

    #[test]
    fn test_limits_clamp() {
        let limits = PlannerLimits::default();
        assert_eq!(limits.clamp_days(2), 3);
        assert_eq!(limits.clamp_days(7), 6);
        assert!((limits.clamp_weekly_km(500.0) - 200.0).abs() < f64::EPSILON);
        assert_eq!(limits.clamp_running_age(0), 1);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(PlannerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_missing_env_file_is_not_an_error() {
        let loaded = dotenvy::from_filename("/nonexistent/pierre-planner/.env");
        assert!(apply_dotenv(loaded).is_ok());
    }

    #[test]
    fn test_unparseable_env_file_is_config_error() {
        let path = env::temp_dir().join(format!("pierre-planner-{}.env", std::process::id()));
        std::fs::write(&path, "this is not a dotenv line\n").unwrap();
        let loaded = dotenvy::from_filename(&path);
        std::fs::remove_file(&path).unwrap();

        let err = apply_dotenv(loaded).unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::ConfigError);
        assert_eq!(err.code.exit_code(), 3);
    }

    #[test]
    fn test_inverted_limits_rejected() {
        let mut config = PlannerConfig::default();
        config.limits.min_weekly_km = 250.0;
        let err = config.validate().unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::ConfigInvalid);
    }
}
