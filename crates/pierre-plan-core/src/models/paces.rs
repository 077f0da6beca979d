// ABOUTME: Training pace zones in seconds per kilometre and their formatted display form
// ABOUTME: Easy pace renders as a range, the other four zones as a single m:ss value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::units::format_pace;

/// Width of the easy pace range in seconds per kilometre
pub const EASY_RANGE_SECONDS: f64 = 30.0;

/// Training intensity zones, slowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceZone {
    /// Conversational aerobic running
    Easy,
    /// Marathon race pace
    Marathon,
    /// Lactate threshold ("tempo") pace
    Threshold,
    /// VO2max interval pace
    Interval,
    /// Short repetition pace
    Repetition,
}

impl PaceZone {
    /// All zones, slowest first
    pub const ALL: [Self; 5] = [
        Self::Easy,
        Self::Marathon,
        Self::Threshold,
        Self::Interval,
        Self::Repetition,
    ];
}

/// Pace per zone in seconds per kilometre
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaceZones {
    /// Lower (faster) bound of the easy range
    pub easy: f64,
    /// Marathon pace
    pub marathon: f64,
    /// Threshold pace
    pub threshold: f64,
    /// Interval pace
    pub interval: f64,
    /// Repetition pace
    pub repetition: f64,
}

/// Formatted training paces carried on the plan and on every workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paces {
    /// Easy range, `m:ss-m:ss`
    pub easy: String,
    /// Marathon pace, `m:ss`
    pub marathon: String,
    /// Threshold pace, `m:ss`
    pub threshold: String,
    /// Interval pace, `m:ss`
    pub interval: String,
    /// Repetition pace, `m:ss`
    pub repetition: String,
}

impl Paces {
    /// Slow end of the easy range (the whole easy string if it is not a range)
    #[must_use]
    pub fn easy_upper(&self) -> &str {
        self.easy
            .split_once('-')
            .map_or(self.easy.as_str(), |(_, upper)| upper)
    }
}

impl From<&PaceZones> for Paces {
    fn from(zones: &PaceZones) -> Self {
        Self {
            easy: format!(
                "{}-{}",
                format_pace(zones.easy),
                format_pace(zones.easy + EASY_RANGE_SECONDS)
            ),
            marathon: format_pace(zones.marathon),
            threshold: format_pace(zones.threshold),
            interval: format_pace(zones.interval),
            repetition: format_pace(zones.repetition),
        }
    }
}
