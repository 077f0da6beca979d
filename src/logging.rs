// ABOUTME: Logging configuration and structured logging setup for the planner
// ABOUTME: Configures log level, output format and stderr destination plus plan event helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! Logs always go to stderr so JSON written to stdout by the CLI stays
//! machine-readable.

use std::env;
use std::io;

use anyhow::Result;
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use crate::config::environment::{Environment, LogLevel};
use crate::errors::ErrorCode;

/// Default service name in structured logs
pub const SERVICE_NAME: &str = "pierre-planner";

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for log aggregation
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact single-line format
    Compact,
}

impl LogFormat {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level directive (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Compact,
            include_location: false,
            service_name: SERVICE_NAME.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::Development,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// `RUST_LOG` takes precedence; without it the level comes from
    /// `LOG_LEVEL`, parsed the same way as [`crate::config::PlannerConfig`].
    #[must_use]
    pub fn from_env() -> Self {
        let environment = Environment::from_str_or_default(
            &env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        );

        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| {
                LogLevel::from_str_or_default(&env::var("LOG_LEVEL").unwrap_or_default())
                    .to_string()
            }),
            format: env::var("LOG_FORMAT")
                .map_or(LogFormat::Compact, |f| LogFormat::from_str_or_default(&f)),
            include_location: environment.is_production()
                || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| SERVICE_NAME.into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
            environment,
        }
    }

    /// Override the level directive, e.g. from a `--verbose` flag
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.level)
            .unwrap_or_else(|_| EnvFilter::new("info"))
            .add_directive(
                format!("pierre_planner={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::INFO.into()),
            )
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .json();
                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr);
                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(io::stderr);
                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        let summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment.to_string(),
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "location": self.include_location,
            }
        });
        tracing::debug!("Logging initialized: {}", summary);
    }
}

/// Plan lifecycle logging helpers
pub struct PlanLogger;

impl PlanLogger {
    /// Log a plan that was generated and wrapped in a record
    pub fn log_plan_created(
        plan_id: Uuid,
        race_distance: &str,
        total_weeks: u32,
        vdot: f64,
        duration_ms: u64,
    ) {
        info!(
            plan.id = %plan_id,
            race.distance = %race_distance,
            plan.total_weeks = total_weeks,
            plan.vdot = vdot,
            plan.duration_ms = duration_ms,
            event_type = "plan_created",
            "Training plan created"
        );
    }

    /// Log a request the service refused
    pub fn log_plan_rejected(code: ErrorCode, message: &str) {
        warn!(
            error.code = ?code,
            error.message = %message,
            event_type = "plan_rejected",
            "Training plan request rejected"
        );
    }

    /// Log a race that leaves less than the minimum preparation time
    pub fn log_short_preparation(weeks_available: i64, plan_weeks: u32) {
        warn!(
            weeks.available = weeks_available,
            weeks.planned = plan_weeks,
            event_type = "short_preparation",
            "Race is closer than the shortest plan; generating the minimum length anyway"
        );
    }
}
