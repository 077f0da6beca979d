// ABOUTME: Weekly schedule builder placing session types on days and splitting weekly volume
// ABOUTME: Phase templates by training days, race-week layout and the long/quality/easy distribution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Days, NaiveDate};
use pierre_plan_core::models::{Paces, Phase, RaceDistance, Workout, WorkoutType};
use tracing::debug;

use crate::plan_constants::distribution::{
    LONG_RUN_SHARE, MIN_TRAINING_DAYS, QUALITY_SHARE, RECOVERY_FACTOR,
};
use crate::workout_synthesizer::create_workout;

/// Days in a training week
pub const DAYS_PER_WEEK: usize = 7;

/// Session types for Monday through Sunday
pub type WeekLayout = [WorkoutType; DAYS_PER_WEEK];

const MONDAY: usize = 0;
const TUESDAY: usize = 1;
const WEDNESDAY: usize = 2;
const THURSDAY: usize = 3;
const FRIDAY: usize = 4;
const SATURDAY: usize = 5;
const SUNDAY: usize = 6;

/// `(fewest training days that enable the slot, day index, session)`
type TemplateSlot = (u8, usize, WorkoutType);

const BASE_TEMPLATE: &[TemplateSlot] = &[
    (3, TUESDAY, WorkoutType::Easy),
    (3, THURSDAY, WorkoutType::Easy),
    (3, SUNDAY, WorkoutType::Long),
    (4, SATURDAY, WorkoutType::Easy),
    (5, WEDNESDAY, WorkoutType::Easy),
];

const BUILD_TEMPLATE: &[TemplateSlot] = &[
    (3, TUESDAY, WorkoutType::Tempo),
    (3, THURSDAY, WorkoutType::Easy),
    (3, SUNDAY, WorkoutType::Long),
    (4, SATURDAY, WorkoutType::Easy),
    (5, WEDNESDAY, WorkoutType::Recovery),
    (6, FRIDAY, WorkoutType::Easy),
];

const PEAK_TEMPLATE: &[TemplateSlot] = &[
    (3, TUESDAY, WorkoutType::Interval),
    (3, FRIDAY, WorkoutType::Tempo),
    (3, SUNDAY, WorkoutType::Long),
    (4, THURSDAY, WorkoutType::Easy),
    (5, WEDNESDAY, WorkoutType::Recovery),
    (6, SATURDAY, WorkoutType::Easy),
];

const TAPER_TEMPLATE: &[TemplateSlot] = &[
    (3, TUESDAY, WorkoutType::Easy),
    (3, FRIDAY, WorkoutType::Tempo),
    (3, SUNDAY, WorkoutType::Easy),
    (4, THURSDAY, WorkoutType::Recovery),
];

const RACE_WEEK: WeekLayout = {
    let mut layout = [WorkoutType::Rest; DAYS_PER_WEEK];
    layout[MONDAY] = WorkoutType::Easy;
    layout[WEDNESDAY] = WorkoutType::Recovery;
    layout[FRIDAY] = WorkoutType::Recovery;
    layout[SUNDAY] = WorkoutType::Race;
    layout
};

const fn template(phase: Phase) -> &'static [TemplateSlot] {
    match phase {
        Phase::Base => BASE_TEMPLATE,
        Phase::Build => BUILD_TEMPLATE,
        Phase::Peak => PEAK_TEMPLATE,
        Phase::Taper => TAPER_TEMPLATE,
    }
}

/// Session type for each day of a week
///
/// The race week ignores phase and training days. Otherwise every template
/// slot whose threshold is within `days_per_week` is filled and the remaining
/// days rest; fewer than three training days yields a week of rest.
#[must_use]
pub fn workout_schedule(phase: Phase, days_per_week: u8, is_race_week: bool) -> WeekLayout {
    if is_race_week {
        return RACE_WEEK;
    }

    let mut layout = [WorkoutType::Rest; DAYS_PER_WEEK];
    if days_per_week < MIN_TRAINING_DAYS {
        return layout;
    }
    for &(min_days, day, workout_type) in template(phase) {
        if days_per_week >= min_days {
            layout[day] = workout_type;
        }
    }
    layout
}

/// Split `weekly_km` across the days of a layout
///
/// The long run takes 28 % and each quality session 15 %. What is left is
/// shared evenly between easy and recovery days, with recovery days running
/// 60 % of an easy day. Race and rest days get nothing.
#[must_use]
pub fn distribute_mileage(weekly_km: u32, layout: &WeekLayout) -> [u32; DAYS_PER_WEEK] {
    let weekly = f64::from(weekly_km);
    let long_km = (weekly * LONG_RUN_SHARE).round();
    let quality_km = (weekly * QUALITY_SHARE).round();

    let count = |pred: fn(WorkoutType) -> bool| layout.iter().filter(|t| pred(**t)).count();
    let long_runs = count(|t| t == WorkoutType::Long);
    let quality_sessions = count(WorkoutType::is_quality);
    let easy_days = count(WorkoutType::is_easy_volume);

    let remaining = (quality_km.mul_add(-(quality_sessions as f64), weekly)
        - long_km * long_runs as f64)
        .max(0.0);
    let per_easy = if easy_days == 0 {
        0.0
    } else {
        (remaining / easy_days as f64).round()
    };
    let recovery_km = (per_easy * RECOVERY_FACTOR).round();

    layout.map(|workout_type| {
        let km = match workout_type {
            WorkoutType::Long => long_km,
            WorkoutType::Tempo | WorkoutType::Interval => quality_km,
            WorkoutType::Easy => per_easy,
            WorkoutType::Recovery => recovery_km,
            WorkoutType::Rest | WorkoutType::Race => 0.0,
        };
        km as u32
    })
}

/// Build the seven workouts of one week starting on `week_start` (a Monday)
#[must_use]
pub fn build_week_workouts(
    phase: Phase,
    weekly_km: u32,
    days_per_week: u8,
    paces: &Paces,
    week_start: NaiveDate,
    race_distance: RaceDistance,
    is_race_week: bool,
) -> Vec<Workout> {
    let layout = workout_schedule(phase, days_per_week, is_race_week);
    let distances = distribute_mileage(weekly_km, &layout);
    debug!(
        phase = phase.label(),
        weekly_km,
        is_race_week,
        ?distances,
        "Distributed weekly mileage"
    );

    layout
        .iter()
        .zip(distances)
        .zip(1_u8..)
        .map(|((&workout_type, distance_km), day_of_week)| {
            let date = week_start
                .checked_add_days(Days::new(u64::from(day_of_week - 1)))
                .unwrap_or(week_start);
            create_workout(
                workout_type,
                distance_km,
                paces,
                date,
                day_of_week,
                race_distance,
            )
        })
        .collect()
}
