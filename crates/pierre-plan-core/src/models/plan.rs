// ABOUTME: Plan-level models: periodization phases, weeks, inputs and summary parameters
// ABOUTME: Value objects produced once per generation and serialized as an opaque record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Paces, RaceDistance, RecentRace, Workout, WorkoutType};

/// Periodization phase, in training order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Aerobic base building
    Base,
    /// Volume build with threshold work
    Build,
    /// Highest load with intervals
    Peak,
    /// Volume reduction before the race
    Taper,
}

impl Phase {
    /// All phases in training order
    pub const ALL: [Self; 4] = [Self::Base, Self::Build, Self::Peak, Self::Taper];

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Build => "Build",
            Self::Peak => "Peak",
            Self::Taper => "Taper",
        }
    }
}

/// Inputs to one plan generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanConfig {
    /// Race day
    pub race_date: NaiveDate,
    /// Race distance category
    pub race_distance: RaceDistance,
    /// Goal finish time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_time: Option<String>,
    /// Current weekly running volume in kilometres
    pub current_weekly_km: f64,
    /// Training days available per week
    pub days_per_week: u8,
    /// Hours available per session
    pub hours_per_session: f64,
    /// Recent race used for fitness estimation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_race: Option<RecentRace>,
    /// Months of regular running
    pub running_age_months: u32,
}

/// One week of the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    /// 1-based week index across the plan
    pub week_number: u32,
    /// Phase this week belongs to
    pub phase: Phase,
    /// 1-based week index inside the phase
    pub phase_week: u32,
    /// Target weekly volume in kilometres
    pub total_mileage_km: u32,
    /// Monday through Sunday
    pub workouts: Vec<Workout>,
}

impl Week {
    /// Sum of prescribed workout distances
    #[must_use]
    pub fn scheduled_km(&self) -> f64 {
        self.workouts.iter().filter_map(|w| w.distance_km).sum()
    }

    /// Number of workouts of the given type
    #[must_use]
    pub fn count_of(&self, workout_type: WorkoutType) -> usize {
        self.workouts
            .iter()
            .filter(|w| w.workout_type == workout_type)
            .count()
    }
}

/// Summary parameters computed once per plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingParams {
    /// Fitness score
    pub vdot: f64,
    /// Number of weeks in the plan
    pub total_weeks: u32,
    /// Peak weekly volume in kilometres
    pub peak_mileage_km: u32,
    /// Training paces
    pub paces: Paces,
}

/// Engine output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlan {
    /// Weeks in order
    pub weeks: Vec<Week>,
    /// Summary parameters
    pub training_params: TrainingParams,
}
