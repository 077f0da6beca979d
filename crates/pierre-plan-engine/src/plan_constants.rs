// ABOUTME: Coaching constants for periodization, mileage progression and workout structure
// ABOUTME: Phase shares, recovery-week cadence, weekly distribution ratios and pace multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Coaching constants used by the plan generator.
//!
//! Grouped by the pipeline stage that reads them. Values follow common
//! periodization guidance (roughly 30/40/20/10 base/build/peak/taper) and
//! Daniels-style weekly structure.

/// Plan horizon
pub mod horizon {
    /// Shortest plan ever generated, in weeks
    pub const MIN_TOTAL_WEEKS: u32 = 8;
}

/// Phase allocation shares and minimums
pub mod phases {
    /// Share of the plan spent in taper
    pub const TAPER_SHARE: f64 = 0.10;
    /// Share of the plan spent in peak
    pub const PEAK_SHARE: f64 = 0.20;
    /// Share of the plan spent in build
    pub const BUILD_SHARE: f64 = 0.40;

    /// Minimum weeks of base
    pub const MIN_BASE_WEEKS: u32 = 2;
    /// Minimum weeks of build
    pub const MIN_BUILD_WEEKS: u32 = 3;
    /// Minimum weeks of peak
    pub const MIN_PEAK_WEEKS: u32 = 2;
    /// Minimum weeks of taper
    pub const MIN_TAPER_WEEKS: u32 = 2;
}

/// Weekly mileage curve
pub mod progression {
    /// Multiplier on current volume when choosing the peak week
    pub const PEAK_GROWTH_FACTOR: f64 = 1.5;

    /// Fraction of peak reached at the end of base
    pub const BASE_TARGET_FRACTION: f64 = 0.70;
    /// Build starts at this fraction of peak
    pub const BUILD_START_FRACTION: f64 = 0.70;
    /// Every Nth build week is a recovery week
    pub const BUILD_RECOVERY_CADENCE: u32 = 4;
    /// Recovery build weeks run at this fraction of the computed value
    pub const BUILD_RECOVERY_FACTOR: f64 = 0.75;

    /// Regular peak weeks hold this fraction of peak
    pub const PEAK_HOLD_FRACTION: f64 = 0.95;
    /// Every Nth peak week drops back
    pub const PEAK_RECOVERY_CADENCE: u32 = 3;
    /// Fraction of peak for a peak-phase recovery week
    pub const PEAK_RECOVERY_FRACTION: f64 = 0.80;

    /// Taper starts from this fraction of peak
    pub const TAPER_START_FRACTION: f64 = 0.70;
    /// Taper sheds this fraction of peak by its last week
    pub const TAPER_REDUCTION: f64 = 0.40;

    /// Per-distance `(minimum, ideal)` peak weekly kilometres
    pub const FIVE_K_PEAK_KM: (f64, f64) = (30.0, 50.0);
    /// 10K `(minimum, ideal)` peak weekly kilometres
    pub const TEN_K_PEAK_KM: (f64, f64) = (40.0, 60.0);
    /// Half marathon `(minimum, ideal)` peak weekly kilometres
    pub const HALF_PEAK_KM: (f64, f64) = (50.0, 70.0);
    /// Marathon `(minimum, ideal)` peak weekly kilometres
    pub const FULL_PEAK_KM: (f64, f64) = (60.0, 80.0);
}

/// How a week's volume is split across its days
pub mod distribution {
    /// Long run share of weekly volume
    pub const LONG_RUN_SHARE: f64 = 0.28;
    /// Share of weekly volume per tempo/interval session
    pub const QUALITY_SHARE: f64 = 0.15;
    /// Recovery runs get this fraction of an easy day
    pub const RECOVERY_FACTOR: f64 = 0.60;
    /// Fewest training days a template schedules
    pub const MIN_TRAINING_DAYS: u8 = 3;
}

/// Workout content
pub mod workout_structure {
    /// Warmup and cooldown distance for quality sessions (km)
    pub const WARMUP_KM: f64 = 2.0;
    /// Cooldown distance for quality sessions (km)
    pub const COOLDOWN_KM: f64 = 2.0;
    /// Threshold portion of a tempo run as a share of its distance
    pub const TEMPO_MAIN_SHARE: f64 = 0.6;
    /// Longest threshold portion (km)
    pub const TEMPO_MAIN_MAX_KM: f64 = 8.0;
    /// Interval repeat length (km)
    pub const INTERVAL_REP_KM: f64 = 1.0;
    /// Jog between repeats (km)
    pub const INTERVAL_RECOVERY_KM: f64 = 0.4;
    /// Kilometres of session distance per repeat
    pub const KM_PER_INTERVAL_REP: u32 = 2;
    /// Most repeats in one session
    pub const MAX_INTERVAL_REPS: u32 = 6;
}

/// Display-only duration estimates (minutes per km)
pub mod duration {
    /// Easy and long runs
    pub const EASY_MIN_PER_KM: f64 = 6.5;
    /// Tempo runs, including warmup and cooldown
    pub const TEMPO_MIN_PER_KM: f64 = 5.5;
    /// Interval sessions, including recoveries
    pub const INTERVAL_MIN_PER_KM: f64 = 5.0;
    /// Recovery runs
    pub const RECOVERY_MIN_PER_KM: f64 = 7.0;
}
