// ABOUTME: Weekly mileage curve across the plan with phase-specific ramps and recovery weeks
// ABOUTME: Computes the peak weekly volume per race distance and one target per plan week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_plan_core::models::{Phase, RaceDistance};

use crate::periodization::PhaseAllocation;
use crate::plan_constants::progression::{
    BASE_TARGET_FRACTION, BUILD_RECOVERY_CADENCE, BUILD_RECOVERY_FACTOR, BUILD_START_FRACTION,
    FIVE_K_PEAK_KM, FULL_PEAK_KM, HALF_PEAK_KM, PEAK_GROWTH_FACTOR, PEAK_HOLD_FRACTION,
    PEAK_RECOVERY_CADENCE, PEAK_RECOVERY_FRACTION, TAPER_REDUCTION, TAPER_START_FRACTION,
    TEN_K_PEAK_KM,
};

const fn peak_bounds(distance: RaceDistance) -> (f64, f64) {
    match distance {
        RaceDistance::FiveK => FIVE_K_PEAK_KM,
        RaceDistance::TenK => TEN_K_PEAK_KM,
        RaceDistance::Half => HALF_PEAK_KM,
        RaceDistance::Full => FULL_PEAK_KM,
    }
}

/// Peak weekly kilometres: 1.5x current volume, held between the distance's
/// minimum and ideal peak
#[must_use]
pub fn peak_mileage(distance: RaceDistance, current_weekly_km: f64) -> u32 {
    let (minimum, ideal) = peak_bounds(distance);
    (current_weekly_km * PEAK_GROWTH_FACTOR)
        .clamp(minimum, ideal)
        .round() as u32
}

/// Unrounded target for week `week` (0-based) of a phase lasting `phase_weeks`
#[must_use]
pub fn phase_week_mileage(
    phase: Phase,
    week: u32,
    phase_weeks: u32,
    current_weekly_km: f64,
    peak_km: f64,
) -> f64 {
    let nth = week + 1;
    let progress = f64::from(nth) / f64::from(phase_weeks.max(1));

    match phase {
        Phase::Base => {
            let target = peak_km * BASE_TARGET_FRACTION;
            (target - current_weekly_km).mul_add(progress, current_weekly_km)
        }
        Phase::Build => {
            let start = peak_km * BUILD_START_FRACTION;
            let ramp = (peak_km - start).mul_add(progress, start);
            if nth % BUILD_RECOVERY_CADENCE == 0 {
                ramp * BUILD_RECOVERY_FACTOR
            } else {
                ramp
            }
        }
        Phase::Peak => {
            if nth % PEAK_RECOVERY_CADENCE == 0 {
                peak_km * PEAK_RECOVERY_FRACTION
            } else {
                peak_km * PEAK_HOLD_FRACTION
            }
        }
        Phase::Taper => peak_km * TAPER_REDUCTION.mul_add(-progress, TAPER_START_FRACTION),
    }
}

/// Target kilometres for every week of the plan, rounded to whole km
#[must_use]
pub fn progression(
    current_weekly_km: f64,
    peak_km: u32,
    allocation: &PhaseAllocation,
) -> Vec<u32> {
    let peak_km = f64::from(peak_km);
    allocation
        .blocks()
        .iter()
        .flat_map(|block| {
            (0..block.weeks).map(move |week| {
                phase_week_mileage(block.phase, week, block.weeks, current_weekly_km, peak_km)
            })
        })
        .map(|km| km.max(0.0).round() as u32)
        .collect()
}
