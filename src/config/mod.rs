// ABOUTME: Configuration module for planner defaults, input limits and runtime settings
// ABOUTME: Re-exports the environment-driven configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for the planner
//!
//! - **Environment**: defaults, limits, log level and deployment environment
//!   read from `PLANNER_*`, `LOG_LEVEL` and `ENVIRONMENT`

/// Environment-driven planner configuration
pub mod environment;

pub use environment::{Environment, LogLevel, PlannerConfig, PlannerDefaults, PlannerLimits};
