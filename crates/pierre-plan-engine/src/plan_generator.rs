// ABOUTME: Assembles a complete periodized plan from athlete inputs and a reference date
// ABOUTME: Wires fitness, paces, phase allocation, mileage curve and weekly schedules together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, Days, NaiveDate};
use pierre_plan_core::models::{GeneratedPlan, PlanConfig, TrainingParams, Week};
use tracing::{debug, info};

use crate::algorithms::{derive_paces, estimate_fitness};
use crate::mileage::{peak_mileage, progression};
use crate::periodization::{allocate_phases, PhaseCursor};
use crate::plan_constants::horizon::MIN_TOTAL_WEEKS;
use crate::schedule::build_week_workouts;

const DAYS_IN_WEEK: i64 = 7;

/// Periodized plan generator
///
/// Stateless: every call derives the whole plan from its arguments, so a
/// single generator can serve any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanGenerator;

impl PlanGenerator {
    /// Create a generator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Whole weeks between `today` and race day, never fewer than eight
    #[must_use]
    pub fn total_weeks(race_date: NaiveDate, today: NaiveDate) -> u32 {
        let weeks = race_date
            .signed_duration_since(today)
            .num_days()
            .div_euclid(DAYS_IN_WEEK);
        u32::try_from(weeks)
            .unwrap_or(0)
            .max(MIN_TOTAL_WEEKS)
    }

    /// Monday of the week containing `today`
    #[must_use]
    pub fn week_one_start(today: NaiveDate) -> NaiveDate {
        let offset = u64::from(today.weekday().num_days_from_monday());
        today.checked_sub_days(Days::new(offset)).unwrap_or(today)
    }

    /// Generate the plan for `config` as seen from `today`
    #[must_use]
    pub fn generate(&self, config: &PlanConfig, today: NaiveDate) -> GeneratedPlan {
        let total_weeks = Self::total_weeks(config.race_date, today);
        let vdot = estimate_fitness(
            config.recent_race.as_ref(),
            config.current_weekly_km,
            config.running_age_months,
        );
        let paces = derive_paces(vdot);
        let peak_km = peak_mileage(config.race_distance, config.current_weekly_km);

        let allocation = allocate_phases(total_weeks);
        let mileage = progression(config.current_weekly_km, peak_km, &allocation);
        debug!(
            total_weeks,
            peak_km,
            ?allocation,
            "Allocated phases and mileage"
        );

        let start = Self::week_one_start(today);
        let mut cursor = PhaseCursor::new(&allocation);
        let mut weeks = Vec::with_capacity(mileage.len());

        for (week_number, weekly_km) in (1..=total_weeks).zip(mileage.iter().copied()) {
            let offset = Days::new(u64::from(week_number - 1) * DAYS_IN_WEEK.unsigned_abs());
            let week_start = start.checked_add_days(offset).unwrap_or(start);
            let is_race_week = week_number == total_weeks;
            let phase = cursor.phase();

            weeks.push(Week {
                week_number,
                phase,
                phase_week: cursor.phase_week(),
                total_mileage_km: weekly_km,
                workouts: build_week_workouts(
                    phase,
                    weekly_km,
                    config.days_per_week,
                    &paces,
                    week_start,
                    config.race_distance,
                    is_race_week,
                ),
            });
            cursor.advance();
        }

        info!(
            race.distance = %config.race_distance,
            race.date = %config.race_date,
            vdot,
            total_weeks,
            peak_km,
            "Generated training plan"
        );

        GeneratedPlan {
            weeks,
            training_params: TrainingParams {
                vdot,
                total_weeks,
                peak_mileage_km: peak_km,
                paces,
            },
        }
    }
}
