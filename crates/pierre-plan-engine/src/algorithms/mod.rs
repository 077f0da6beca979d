// ABOUTME: Lookup-table algorithms behind fitness estimation and pace derivation
// ABOUTME: Shared bounded interpolation plus the VDOT and pace calibration tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Algorithm Module
//!
//! Every lookup in the engine (race time to VDOT, VDOT to race time, VDOT to
//! pace) is a fixed nine-point calibration table read through one bounded
//! linear interpolation routine.
//!
//! # Example
//!
//! ```rust
//! use pierre_plan_core::models::RaceDistance;
//! use pierre_plan_engine::algorithms::{derive_paces, vdot::calculate_vdot};
//!
//! let vdot = calculate_vdot(RaceDistance::FiveK, "20:00");
//! assert!((vdot - 52.0).abs() < f64::EPSILON);
//! assert_eq!(derive_paces(vdot).threshold, "4:08");
//! ```

pub mod interpolation;
pub mod paces;
pub mod vdot;

pub use interpolation::{interpolate, CalibrationTable, CALIBRATION_POINTS};
pub use paces::{derive_paces, pace_zones};
pub use vdot::{estimate_fitness, predict_race_time};
