// ABOUTME: Workout, workout type and structured segment models for a plan day
// ABOUTME: Tagged enums replace free-form type strings so scheduling matches are exhaustive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of session scheduled on a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Easy aerobic run
    Easy,
    /// Weekly long run
    Long,
    /// Threshold run with warmup and cooldown
    Tempo,
    /// Repeated 1 km intervals
    Interval,
    /// Very easy recovery run
    Recovery,
    /// No running
    Rest,
    /// Goal race
    Race,
}

impl WorkoutType {
    /// Tempo and interval sessions
    #[must_use]
    pub const fn is_quality(self) -> bool {
        matches!(self, Self::Tempo | Self::Interval)
    }

    /// Sessions that share the leftover easy mileage
    #[must_use]
    pub const fn is_easy_volume(self) -> bool {
        matches!(self, Self::Easy | Self::Recovery)
    }

    /// Human-readable label, also used as the workout title
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy run",
            Self::Long => "Long run",
            Self::Tempo => "Tempo run",
            Self::Interval => "Intervals",
            Self::Recovery => "Recovery run",
            Self::Rest => "Rest day",
            Self::Race => "Race day",
        }
    }
}

/// Role of a segment inside a structured workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentType {
    /// Easy running before the main set
    Warmup,
    /// Work portion
    Main,
    /// Easy running after the main set
    Cooldown,
    /// Jog between repeats
    Recovery,
}

/// A structured step of a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Segment role
    #[serde(rename = "type")]
    pub segment_type: SegmentType,
    /// Distance in kilometres
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    /// Duration in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// Target pace string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace: Option<String>,
    /// Repeat count for interval sets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<u32>,
}

impl Segment {
    /// Distance-based segment at a pace
    #[must_use]
    pub fn distance(segment_type: SegmentType, distance_km: f64, pace: &str) -> Self {
        Self {
            segment_type,
            distance_km: Some(distance_km),
            duration_minutes: None,
            pace: Some(pace.to_owned()),
            repeat: None,
        }
    }

    /// Set the repeat count
    #[must_use]
    pub const fn repeated(mut self, repeat: u32) -> Self {
        self.repeat = Some(repeat);
        self
    }
}

/// One day of a training week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// 1 = Monday .. 7 = Sunday
    pub day_of_week: u8,
    /// Calendar date
    pub date: NaiveDate,
    /// Session kind
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    /// Short title
    pub title: String,
    /// Narrative description
    pub description: String,
    /// Prescribed distance in kilometres
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    /// Rough duration estimate in minutes (display only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// Target pace string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_pace: Option<String>,
    /// Structured steps for quality sessions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<Segment>>,
    /// Completion flag, owned by whoever tracks the athlete's log
    pub completed: bool,
}
