// ABOUTME: Plan creation service validating athlete requests before running the plan engine
// ABOUTME: Applies configured defaults and clamps, wraps output in a tracked plan record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Instant;

use chrono::{DateTime, NaiveDate, Utc};
use pierre_plan_core::models::{
    PlanConfig, Race, RaceDistance, RecentRace, TrainingParams, Week, Workout, WorkoutType,
};
use pierre_plan_core::units::{format_time, try_parse_time};
use pierre_plan_engine::algorithms::vdot::{predict_race_time, vdot_from_seconds};
use pierre_plan_engine::plan_constants::horizon::MIN_TOTAL_WEEKS;
use pierre_plan_engine::PlanGenerator;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::PlannerConfig;
use crate::errors::{AppError, AppResult};
use crate::logging::PlanLogger;

/// Default number of workouts to pass to [`Plan::upcoming_workouts`]
pub const UPCOMING_WORKOUT_LIMIT: usize = 5;

/// An athlete's request for a new plan; omitted fields fall back to configured defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// Goal race name
    pub race_name: Option<String>,
    /// Goal race day
    pub race_date: Option<NaiveDate>,
    /// Goal race distance
    pub distance: Option<RaceDistance>,
    /// Goal finish time (`m:ss` or `h:mm:ss`)
    pub target_time: Option<String>,
    /// Host city
    pub city: Option<String>,
    /// Current weekly kilometres
    pub weekly_km: Option<f64>,
    /// Training days per week
    pub days_per_week: Option<u8>,
    /// Hours available per session
    pub hours_per_session: Option<f64>,
    /// Months of regular running
    pub running_age_months: Option<u32>,
    /// Finish time of a recent race
    pub recent_race_time: Option<String>,
    /// Distance of that recent race
    pub recent_race_distance: Option<RaceDistance>,
}

/// Lifecycle state of a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    /// Being followed
    #[default]
    Active,
    /// Race done
    Completed,
    /// Given up before race day
    Abandoned,
}

/// A generated plan with its identity and race metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Plan identifier
    pub id: Uuid,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Lifecycle state
    pub status: PlanStatus,
    /// Goal race
    pub race: Race,
    /// Fitness, paces and plan dimensions
    pub training_params: TrainingParams,
    /// Weeks in order
    pub weeks: Vec<Week>,
}

/// Aggregate figures for a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    /// Number of weeks
    pub total_weeks: u32,
    /// Kilometres prescribed across all workouts
    pub total_km: f64,
    /// Tempo and interval sessions
    pub quality_sessions: usize,
    /// Long runs
    pub long_runs: usize,
    /// Highest weekly target
    pub peak_week_km: u32,
    /// Finish time predicted from the current VDOT
    pub predicted_finish: String,
    /// VDOT implied by the goal time, when one was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_vdot: Option<f64>,
}

impl Plan {
    fn workouts(&self) -> impl Iterator<Item = &Workout> {
        self.weeks.iter().flat_map(|week| week.workouts.iter())
    }

    /// Aggregate figures over the whole plan
    #[must_use]
    pub fn summary(&self) -> PlanSummary {
        let count = |workout_type: WorkoutType| {
            self.weeks
                .iter()
                .map(|week| week.count_of(workout_type))
                .sum::<usize>()
        };
        let target_vdot = self
            .race
            .target_time
            .as_deref()
            .and_then(|time| try_parse_time(time).ok())
            .map(|seconds| vdot_from_seconds(self.race.distance, f64::from(seconds)));

        PlanSummary {
            total_weeks: self.training_params.total_weeks,
            total_km: self.weeks.iter().map(Week::scheduled_km).sum(),
            quality_sessions: count(WorkoutType::Tempo) + count(WorkoutType::Interval),
            long_runs: count(WorkoutType::Long),
            peak_week_km: self
                .weeks
                .iter()
                .map(|week| week.total_mileage_km)
                .max()
                .unwrap_or(0),
            predicted_finish: format_time(predict_race_time(
                self.training_params.vdot,
                self.race.distance,
            )),
            target_vdot,
        }
    }

    /// Flip the completion flag of one workout, returning the new value
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the week or day does not exist
    pub fn toggle_workout(&mut self, week_number: u32, day_of_week: u8) -> AppResult<bool> {
        let total_weeks = self.training_params.total_weeks;
        let workout = self
            .weeks
            .iter_mut()
            .find(|week| week.week_number == week_number)
            .ok_or_else(|| {
                AppError::out_of_range(format!(
                    "Week {week_number} is not part of this plan (1..={total_weeks})"
                ))
            })?
            .workouts
            .iter_mut()
            .find(|workout| workout.day_of_week == day_of_week)
            .ok_or_else(|| {
                AppError::out_of_range(format!(
                    "Day {day_of_week} is not a valid day of week (1..=7)"
                ))
            })?;

        workout.completed = !workout.completed;
        Ok(workout.completed)
    }

    /// Share of running workouts marked completed, in whole percent
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        let (scheduled, completed) = self
            .workouts()
            .filter(|workout| workout.workout_type != WorkoutType::Rest)
            .fold((0_u32, 0_u32), |(scheduled, completed), workout| {
                (scheduled + 1, completed + u32::from(workout.completed))
            });
        if scheduled == 0 {
            return 0;
        }
        (f64::from(completed) * 100.0 / f64::from(scheduled)).round() as u32
    }

    /// The next `limit` open workouts dated on or after `today`
    #[must_use]
    pub fn upcoming_workouts(&self, today: NaiveDate, limit: usize) -> Vec<&Workout> {
        self.workouts()
            .filter(|workout| workout.date >= today && !workout.completed)
            .take(limit)
            .collect()
    }

    /// Change the lifecycle state
    pub fn set_status(&mut self, status: PlanStatus) {
        self.status = status;
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Validates plan requests and runs the generator
#[derive(Debug, Clone, Default)]
pub struct PlanService {
    config: PlannerConfig,
    generator: PlanGenerator,
}

impl PlanService {
    /// Create a service with the given configuration
    #[must_use]
    pub const fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            generator: PlanGenerator::new(),
        }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    fn recent_race(request: &PlanRequest) -> AppResult<Option<RecentRace>> {
        let time = non_empty(request.recent_race_time.as_deref());
        match (time, request.recent_race_distance) {
            (None, _) => Ok(None),
            (Some(_), None) => Err(AppError::missing_field("recentRaceDistance")),
            (Some(time), Some(distance)) => {
                try_parse_time(time)?;
                Ok(Some(RecentRace {
                    distance,
                    time: time.to_owned(),
                }))
            }
        }
    }

    /// Turn a request into a validated engine configuration and race record
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for an absent name, date or distance,
    /// `ValueOutOfRange` for a race date that is not after `today` or a
    /// non-positive session length, `InvalidFormat` for an unparseable goal or
    /// recent race time, and `InvalidInput` for a non-finite weekly volume
    pub fn prepare(&self, request: &PlanRequest, today: NaiveDate) -> AppResult<(PlanConfig, Race)> {
        let name = non_empty(request.race_name.as_deref())
            .ok_or_else(|| AppError::missing_field("raceName"))?;
        let race_date = request
            .race_date
            .ok_or_else(|| AppError::missing_field("raceDate"))?;
        let distance = request
            .distance
            .ok_or_else(|| AppError::missing_field("distance"))?;

        if race_date <= today {
            return Err(AppError::out_of_range(format!(
                "Race date {race_date} must be after {today}"
            )));
        }

        let target_time = non_empty(request.target_time.as_deref())
            .map(|time| try_parse_time(time).map(|_| time.to_owned()))
            .transpose()?;
        let recent_race = Self::recent_race(request)?;

        let defaults = &self.config.defaults;
        let limits = &self.config.limits;

        let weekly_km = request.weekly_km.unwrap_or(defaults.weekly_km);
        if !weekly_km.is_finite() {
            return Err(AppError::invalid_input(
                "Weekly kilometres must be a finite number",
            ));
        }
        let hours_per_session = request.hours_per_session.unwrap_or(defaults.hours_per_session);
        if !(hours_per_session.is_finite() && hours_per_session > 0.0) {
            return Err(AppError::out_of_range(format!(
                "Hours per session must be positive, got {hours_per_session}"
            )));
        }

        let config = PlanConfig {
            race_date,
            race_distance: distance,
            target_time: target_time.clone(),
            current_weekly_km: limits.clamp_weekly_km(weekly_km),
            days_per_week: limits
                .clamp_days(request.days_per_week.unwrap_or(defaults.days_per_week)),
            hours_per_session,
            recent_race,
            running_age_months: limits.clamp_running_age(
                request
                    .running_age_months
                    .unwrap_or(defaults.running_age_months),
            ),
        };
        let race = Race {
            name: name.to_owned(),
            date: race_date,
            distance,
            target_time,
            city: non_empty(request.city.as_deref()).map(str::to_owned),
        };
        Ok((config, race))
    }

    /// Validate `request` and generate a plan as seen from `today`
    ///
    /// # Errors
    ///
    /// Returns the validation errors described on [`PlanService::prepare`]
    pub fn create_plan(&self, request: &PlanRequest, today: NaiveDate) -> AppResult<Plan> {
        let started = Instant::now();
        let (config, race) = self.prepare(request, today).inspect_err(|e| {
            PlanLogger::log_plan_rejected(e.code, &e.message);
        })?;

        let weeks_available = race.date.signed_duration_since(today).num_days() / 7;
        if weeks_available < i64::from(MIN_TOTAL_WEEKS) {
            PlanLogger::log_short_preparation(weeks_available, MIN_TOTAL_WEEKS);
        }

        let generated = self.generator.generate(&config, today);
        let plan = Plan {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            status: PlanStatus::Active,
            race,
            training_params: generated.training_params,
            weeks: generated.weeks,
        };

        PlanLogger::log_plan_created(
            plan.id,
            plan.race.distance.as_str(),
            plan.training_params.total_weeks,
            plan.training_params.vdot,
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        Ok(plan)
    }
}
