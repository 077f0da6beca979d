// ABOUTME: VDOT fitness estimation from a recent race or from training volume and history
// ABOUTME: Uses per-distance race-time calibration tables derived from Daniels' Running Formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fitness estimation.
//!
//! Each race distance has a nine-point table of finish time (seconds) against
//! VDOT taken from Jack Daniels' published tables. Times between calibration
//! points interpolate linearly, times outside the table clamp to its ends.
//!
//! # Scientific References
//!
//! - Daniels, J. (2013). "Daniels' Running Formula" (3rd ed.). Human Kinetics.

use pierre_plan_core::models::{RaceDistance, RecentRace};
use pierre_plan_core::units::parse_time;
use tracing::{debug, warn};

use super::interpolation::{interpolate, invert, CalibrationTable};

/// Lowest VDOT any table produces
pub const MIN_VDOT: f64 = 30.0;

/// Highest VDOT any table produces
pub const MAX_VDOT: f64 = 85.0;

/// Starting point of the training-volume heuristic
pub const HEURISTIC_BASE_VDOT: f64 = 30.0;

/// Cap applied to the training-volume heuristic
pub const HEURISTIC_MAX_VDOT: f64 = 70.0;

/// Weekly kilometre brackets and their VDOT bonus, highest first
const MILEAGE_BONUS: [(f64, f64); 4] = [(80.0, 20.0), (60.0, 15.0), (40.0, 10.0), (20.0, 5.0)];

/// Running-history brackets (months) and their VDOT bonus, highest first
const RUNNING_AGE_BONUS: [(u32, f64); 3] = [(60, 10.0), (36, 7.0), (12, 3.0)];

// Finish time in seconds -> VDOT, ascending by time.
static FIVE_K_TABLE: CalibrationTable = [
    (840.0, 85.0),  // 14:00
    (960.0, 70.0),  // 16:00
    (1080.0, 60.0), // 18:00
    (1200.0, 52.0), // 20:00
    (1320.0, 46.0), // 22:00
    (1440.0, 41.0), // 24:00
    (1560.0, 37.0), // 26:00
    (1680.0, 33.0), // 28:00
    (1800.0, 30.0), // 30:00
];

static TEN_K_TABLE: CalibrationTable = [
    (1800.0, 85.0), // 30:00
    (2040.0, 70.0), // 34:00
    (2280.0, 60.0), // 38:00
    (2520.0, 52.0), // 42:00
    (2760.0, 46.0), // 46:00
    (3000.0, 41.0), // 50:00
    (3240.0, 37.0), // 54:00
    (3480.0, 33.0), // 58:00
    (3720.0, 30.0), // 62:00
];

static HALF_TABLE: CalibrationTable = [
    (3780.0, 85.0), // 1:03:00
    (4320.0, 70.0), // 1:12:00
    (4860.0, 60.0), // 1:21:00
    (5400.0, 52.0), // 1:30:00
    (5940.0, 46.0), // 1:39:00
    (6480.0, 41.0), // 1:48:00
    (7020.0, 37.0), // 1:57:00
    (7560.0, 33.0), // 2:06:00
    (8100.0, 30.0), // 2:15:00
];

static FULL_TABLE: CalibrationTable = [
    (7500.0, 85.0),  // 2:05:00
    (8700.0, 70.0),  // 2:25:00
    (9900.0, 60.0),  // 2:45:00
    (11100.0, 52.0), // 3:05:00
    (12300.0, 46.0), // 3:25:00
    (13500.0, 41.0), // 3:45:00
    (14700.0, 37.0), // 4:05:00
    (15900.0, 33.0), // 4:25:00
    (17100.0, 30.0), // 4:45:00
];

/// Race-time calibration table for a distance
#[must_use]
pub fn race_time_table(distance: RaceDistance) -> &'static CalibrationTable {
    match distance {
        RaceDistance::FiveK => &FIVE_K_TABLE,
        RaceDistance::TenK => &TEN_K_TABLE,
        RaceDistance::Half => &HALF_TABLE,
        RaceDistance::Full => &FULL_TABLE,
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// VDOT for a finish time given in seconds, rounded to one decimal
#[must_use]
pub fn vdot_from_seconds(distance: RaceDistance, seconds: f64) -> f64 {
    round_to_tenth(interpolate(seconds, race_time_table(distance)))
}

/// VDOT for a finish time string (`m:ss` or `h:mm:ss`)
///
/// A string that does not parse counts as zero seconds, which is faster than
/// every calibration point and therefore returns [`MAX_VDOT`].
#[must_use]
pub fn calculate_vdot(distance: RaceDistance, time: &str) -> f64 {
    let seconds = parse_time(time);
    if seconds == 0 {
        warn!(
            race.distance = %distance,
            race.time = %time,
            "Unparseable race time, fitness falls back to the table maximum"
        );
    }
    vdot_from_seconds(distance, f64::from(seconds))
}

/// Heuristic VDOT from weekly volume and months of running
#[must_use]
pub fn estimate_from_training(weekly_km: f64, running_age_months: u32) -> f64 {
    let mileage_bonus = MILEAGE_BONUS
        .iter()
        .find(|(threshold, _)| weekly_km >= *threshold)
        .map_or(0.0, |(_, bonus)| *bonus);

    let age_bonus = RUNNING_AGE_BONUS
        .iter()
        .find(|(threshold, _)| running_age_months >= *threshold)
        .map_or(0.0, |(_, bonus)| *bonus);

    (HEURISTIC_BASE_VDOT + mileage_bonus + age_bonus).min(HEURISTIC_MAX_VDOT)
}

/// Estimate fitness, preferring a recent race over the training heuristic
#[must_use]
pub fn estimate_fitness(
    recent_race: Option<&RecentRace>,
    weekly_km: f64,
    running_age_months: u32,
) -> f64 {
    if let Some(race) = recent_race {
        let vdot = calculate_vdot(race.distance, &race.time);
        debug!(vdot, race.distance = %race.distance, "Fitness estimated from recent race");
        return vdot;
    }

    let vdot = estimate_from_training(weekly_km, running_age_months);
    debug!(
        vdot,
        weekly_km, running_age_months, "Fitness estimated from training history"
    );
    vdot
}

/// Predicted finish time in seconds for a distance at a given VDOT
///
/// Reads the distance table backwards; VDOT outside [30, 85] clamps to the
/// slowest or fastest calibrated time.
#[must_use]
pub fn predict_race_time(vdot: f64, distance: RaceDistance) -> f64 {
    interpolate(vdot, &invert(race_time_table(distance)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_sorted_and_bounded() {
        for distance in RaceDistance::ALL {
            let table = race_time_table(distance);
            assert!(table.windows(2).all(|p| p[0].0 < p[1].0 && p[0].1 > p[1].1));
            assert!((table[0].1 - MAX_VDOT).abs() < f64::EPSILON);
            assert!((table[8].1 - MIN_VDOT).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_heuristic_brackets() {
        assert!((estimate_from_training(45.0, 24) - 43.0).abs() < f64::EPSILON);
        assert!((estimate_from_training(10.0, 3) - 30.0).abs() < f64::EPSILON);
        assert!((estimate_from_training(20.0, 12) - 38.0).abs() < f64::EPSILON);
        assert!((estimate_from_training(60.0, 36) - 52.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_heuristic_capped() {
        assert!((estimate_from_training(120.0, 120) - HEURISTIC_MAX_VDOT).abs() < f64::EPSILON);
    }

    #[test]
    fn test_recent_race_preferred_over_heuristic() {
        let race = RecentRace {
            distance: RaceDistance::TenK,
            time: "42:00".to_owned(),
        };
        let vdot = estimate_fitness(Some(&race), 10.0, 1);
        assert!((vdot - 52.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_interpolated_value_rounded_to_tenth() {
        // 21:00 sits halfway between 52 (20:00) and 46 (22:00)
        assert!((calculate_vdot(RaceDistance::FiveK, "21:00") - 49.0).abs() < 1e-9);
        // 20:10 -> 52 - 6 * 10/120 = 51.5
        assert!((calculate_vdot(RaceDistance::FiveK, "20:10") - 51.5).abs() < 1e-9);
    }

    #[test]
    fn test_predict_race_time_inverts_table() {
        assert!((predict_race_time(52.0, RaceDistance::Full) - 11_100.0).abs() < 1e-6);
        assert!((predict_race_time(49.0, RaceDistance::FiveK) - 1_260.0).abs() < 1e-6);
        assert!((predict_race_time(95.0, RaceDistance::FiveK) - 840.0).abs() < 1e-6);
        assert!((predict_race_time(10.0, RaceDistance::FiveK) - 1_800.0).abs() < 1e-6);
    }
}
