// ABOUTME: Main library entry point for the Pierre training plan generator
// ABOUTME: Configuration, logging and the validating plan service over the plan engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Planner
//!
//! Periodized training plans for 5K, 10K, half marathon and marathon races.
//!
//! ## Architecture
//!
//! - **`pierre-plan-core`**: errors, plan models and time units
//! - **`pierre-plan-engine`**: pure plan generation algorithms
//! - **Config**: defaults and input limits from the environment
//! - **Services**: request validation and plan records
//! - **Logging**: `tracing` subscriber setup writing to stderr
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pierre_planner::config::PlannerConfig;
//! use pierre_planner::models::RaceDistance;
//! use pierre_planner::services::{PlanRequest, PlanService};
//!
//! let service = PlanService::new(PlannerConfig::default());
//! let request = PlanRequest {
//!     race_name: Some("City Marathon".into()),
//!     race_date: NaiveDate::from_ymd_opt(2025, 10, 12),
//!     distance: Some(RaceDistance::Full),
//!     ..PlanRequest::default()
//! };
//! let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
//! let plan = service.create_plan(&request, today).unwrap();
//! assert_eq!(plan.weeks.len(), 18);
//! ```

/// Environment-driven configuration
pub mod config;

/// Error types shared with the core crate
pub mod errors;

/// Structured logging setup and plan event helpers
pub mod logging;

/// Plan creation and tracking services
pub mod services;

pub use pierre_plan_core::{models, units};
pub use pierre_plan_engine as engine;
