// ABOUTME: Race distance categories and race metadata for a training plan
// ABOUTME: Closed enumeration of 5K, 10K, half and full marathon with parsing and labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Race distance category a plan is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RaceDistance {
    /// 5 kilometres
    #[serde(rename = "5K")]
    FiveK,
    /// 10 kilometres
    #[serde(rename = "10K")]
    TenK,
    /// Half marathon
    #[serde(rename = "half")]
    Half,
    /// Marathon
    #[serde(rename = "full")]
    Full,
}

impl RaceDistance {
    /// All categories, shortest first
    pub const ALL: [Self; 4] = [Self::FiveK, Self::TenK, Self::Half, Self::Full];

    /// Race length in kilometres
    #[must_use]
    pub const fn kilometers(self) -> f64 {
        match self {
            Self::FiveK => 5.0,
            Self::TenK => 10.0,
            Self::Half => 21.0975,
            Self::Full => 42.195,
        }
    }

    /// Wire identifier (`5K`, `10K`, `half`, `full`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FiveK => "5K",
            Self::TenK => "10K",
            Self::Half => "half",
            Self::Full => "full",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FiveK => "5 km",
            Self::TenK => "10 km",
            Self::Half => "Half marathon",
            Self::Full => "Marathon",
        }
    }
}

impl fmt::Display for RaceDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RaceDistance {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "5k" => Ok(Self::FiveK),
            "10k" => Ok(Self::TenK),
            "half" | "half-marathon" => Ok(Self::Half),
            "full" | "marathon" => Ok(Self::Full),
            other => Err(AppError::invalid_input(format!(
                "Unknown race distance: '{other}'. Valid options: 5K, 10K, half, full"
            ))),
        }
    }
}

/// A recent race result used to estimate fitness
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentRace {
    /// Distance raced
    pub distance: RaceDistance,
    /// Finish time as `m:ss` or `h:mm:ss`
    pub time: String,
}

/// The goal race a plan culminates in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    /// Race name
    pub name: String,
    /// Race day
    pub date: NaiveDate,
    /// Distance category
    pub distance: RaceDistance,
    /// Goal finish time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_time: Option<String>,
    /// Host city
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}
