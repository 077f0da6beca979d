// ABOUTME: Training pace derivation from VDOT for the five Daniels intensity zones
// ABOUTME: Interpolates fixed VDOT-to-pace tables and formats the results as m:ss strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_plan_core::models::{PaceZone, PaceZones, Paces};

use super::interpolation::{interpolate, CalibrationTable};

// VDOT -> seconds per kilometre, ascending by VDOT.
static EASY_TABLE: CalibrationTable = [
    (30.0, 450.0), // 7:30
    (35.0, 408.0), // 6:48
    (40.0, 372.0), // 6:12
    (45.0, 342.0), // 5:42
    (50.0, 318.0), // 5:18
    (55.0, 294.0), // 4:54
    (60.0, 276.0), // 4:36
    (65.0, 258.0), // 4:18
    (70.0, 240.0), // 4:00
];

static MARATHON_TABLE: CalibrationTable = [
    (30.0, 408.0), // 6:48
    (35.0, 366.0), // 6:06
    (40.0, 330.0), // 5:30
    (45.0, 300.0), // 5:00
    (50.0, 276.0), // 4:36
    (55.0, 252.0), // 4:12
    (60.0, 234.0), // 3:54
    (65.0, 216.0), // 3:36
    (70.0, 198.0), // 3:18
];

static THRESHOLD_TABLE: CalibrationTable = [
    (30.0, 378.0), // 6:18
    (35.0, 342.0), // 5:42
    (40.0, 312.0), // 5:12
    (45.0, 282.0), // 4:42
    (50.0, 258.0), // 4:18
    (55.0, 234.0), // 3:54
    (60.0, 216.0), // 3:36
    (65.0, 198.0), // 3:18
    (70.0, 180.0), // 3:00
];

static INTERVAL_TABLE: CalibrationTable = [
    (30.0, 348.0), // 5:48
    (35.0, 318.0), // 5:18
    (40.0, 288.0), // 4:48
    (45.0, 258.0), // 4:18
    (50.0, 234.0), // 3:54
    (55.0, 210.0), // 3:30
    (60.0, 192.0), // 3:12
    (65.0, 174.0), // 2:54
    (70.0, 162.0), // 2:42
];

static REPETITION_TABLE: CalibrationTable = [
    (30.0, 318.0), // 5:18
    (35.0, 288.0), // 4:48
    (40.0, 264.0), // 4:24
    (45.0, 240.0), // 4:00
    (50.0, 216.0), // 3:36
    (55.0, 192.0), // 3:12
    (60.0, 174.0), // 2:54
    (65.0, 156.0), // 2:36
    (70.0, 144.0), // 2:24
];

/// Pace calibration table for a zone
#[must_use]
pub fn pace_table(zone: PaceZone) -> &'static CalibrationTable {
    match zone {
        PaceZone::Easy => &EASY_TABLE,
        PaceZone::Marathon => &MARATHON_TABLE,
        PaceZone::Threshold => &THRESHOLD_TABLE,
        PaceZone::Interval => &INTERVAL_TABLE,
        PaceZone::Repetition => &REPETITION_TABLE,
    }
}

/// Seconds per kilometre for one zone at a VDOT
#[must_use]
pub fn zone_pace(vdot: f64, zone: PaceZone) -> f64 {
    interpolate(vdot, pace_table(zone))
}

/// Unformatted paces for every zone
#[must_use]
pub fn pace_zones(vdot: f64) -> PaceZones {
    PaceZones {
        easy: zone_pace(vdot, PaceZone::Easy),
        marathon: zone_pace(vdot, PaceZone::Marathon),
        threshold: zone_pace(vdot, PaceZone::Threshold),
        interval: zone_pace(vdot, PaceZone::Interval),
        repetition: zone_pace(vdot, PaceZone::Repetition),
    }
}

/// Formatted training paces for a VDOT
#[must_use]
pub fn derive_paces(vdot: f64) -> Paces {
    Paces::from(&pace_zones(vdot))
}
