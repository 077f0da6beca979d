// ABOUTME: Bounded piecewise-linear interpolation over fixed calibration tables
// ABOUTME: Shared by the race-time, VDOT and pace lookups; never extrapolates past the ends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Number of calibration points in every lookup table
pub const CALIBRATION_POINTS: usize = 9;

/// `(x, y)` pairs sorted ascending by `x`
pub type CalibrationTable = [(f64, f64); CALIBRATION_POINTS];

/// Interpolate `y` at `x` over `points` (sorted ascending by `x`)
///
/// At or below the first `x` the first `y` is returned, at or above the last
/// `x` the last `y`. A NaN `x` matches no segment and yields the first `y`.
#[must_use]
pub fn interpolate(x: f64, points: &[(f64, f64)]) -> f64 {
    let (Some(&(first_x, first_y)), Some(&(last_x, last_y))) = (points.first(), points.last())
    else {
        return 0.0;
    };

    if x <= first_x {
        return first_y;
    }
    if x >= last_x {
        return last_y;
    }

    points
        .windows(2)
        .find_map(|pair| {
            let (x1, y1) = pair[0];
            let (x2, y2) = pair[1];
            (x >= x1 && x <= x2).then(|| ((x - x1) / (x2 - x1)).mul_add(y2 - y1, y1))
        })
        .unwrap_or(first_y)
}

/// Swap the axes of a table, re-sorting so the new `x` ascends
///
/// Used to read a time-to-VDOT table backwards (VDOT-to-time).
#[must_use]
pub fn invert(table: &CalibrationTable) -> CalibrationTable {
    let mut inverted = table.map(|(x, y)| (y, x));
    inverted.sort_by(|a, b| a.0.total_cmp(&b.0));
    inverted
}
