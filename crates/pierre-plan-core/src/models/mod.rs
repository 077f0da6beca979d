// ABOUTME: Domain models for periodized running plans
// ABOUTME: Re-exports race, pace, workout and plan types from their submodules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Training paces per intensity zone
pub mod paces;
/// Plan-level models (phases, weeks, config, output)
pub mod plan;
/// Race distances and race metadata
pub mod race;
/// Workouts and structured segments
pub mod workout;

pub use paces::{PaceZone, PaceZones, Paces, EASY_RANGE_SECONDS};
pub use plan::{GeneratedPlan, Phase, PlanConfig, TrainingParams, Week};
pub use race::{Race, RaceDistance, RecentRace};
pub use workout::{Segment, SegmentType, Workout, WorkoutType};
