// ABOUTME: Periodized running plan engine: fitness, paces, phases, mileage and weekly schedules
// ABOUTME: Pure synchronous algorithms with no I/O, shared by the planner service and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Plan Engine
//!
//! Turns a race goal and an athlete profile into a week-by-week plan.
//!
//! ## Pipeline
//!
//! 1. **Fitness**: VDOT from a recent race or a training-history heuristic
//! 2. **Paces**: five training zones interpolated from the VDOT
//! 3. **Periodization**: base, build, peak and taper blocks
//! 4. **Mileage**: one weekly target per plan week
//! 5. **Schedule**: session types per day and their distances
//! 6. **Workouts**: titles, descriptions, paces and segments
//!
//! The engine never fails: malformed or extreme input degrades to bounded
//! values and a `tracing` warning. Input validation belongs to the caller.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pierre_plan_core::models::{PlanConfig, RaceDistance};
//! use pierre_plan_engine::PlanGenerator;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
//! let config = PlanConfig {
//!     race_date: NaiveDate::from_ymd_opt(2025, 4, 28).unwrap(),
//!     race_distance: RaceDistance::Half,
//!     target_time: None,
//!     current_weekly_km: 30.0,
//!     days_per_week: 4,
//!     hours_per_session: 1.0,
//!     recent_race: None,
//!     running_age_months: 12,
//! };
//! let plan = PlanGenerator::new().generate(&config, today);
//! assert_eq!(plan.weeks.len(), 16);
//! ```

/// VDOT and pace lookup tables with bounded interpolation
pub mod algorithms;

/// Periodization, progression and workout constants
pub mod plan_constants;

/// Phase allocation and the week-by-week phase cursor
pub mod periodization;

/// Weekly mileage curve
pub mod mileage;

/// Day templates and weekly distance distribution
pub mod schedule;

/// Session titles, descriptions, paces and segments
pub mod workout_synthesizer;

/// Plan assembly
pub mod plan_generator;

pub use algorithms::{derive_paces, estimate_fitness, pace_zones, predict_race_time};
pub use periodization::{allocate_phases, PhaseAllocation, PhaseBlock, PhaseCursor};
pub use plan_generator::PlanGenerator;
