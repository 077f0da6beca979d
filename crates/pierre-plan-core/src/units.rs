// ABOUTME: Pace and race-time parsing and formatting helpers (m:ss, h:mm:ss)
// ABOUTME: Lenient parsers for the engine plus a strict parser for request validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Time and pace units.
//!
//! Paces are seconds per kilometre and render as `m:ss`. Race times render as
//! `m:ss` below one hour and `h:mm:ss` above. Seconds are rounded before they
//! are split into fields so a value never renders as `4:60`.

use crate::errors::{AppError, AppResult};

const SECONDS_PER_MINUTE: u32 = 60;
const SECONDS_PER_HOUR: u32 = 3_600;

fn round_seconds(seconds: f64) -> u32 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds.round() as u32
    } else {
        0
    }
}

/// Format a pace in seconds per kilometre as `m:ss`
#[must_use]
pub fn format_pace(seconds_per_km: f64) -> String {
    let total = round_seconds(seconds_per_km);
    format!(
        "{}:{:02}",
        total / SECONDS_PER_MINUTE,
        total % SECONDS_PER_MINUTE
    )
}

/// Parse an `m:ss` pace back into seconds per kilometre
///
/// Returns `None` for anything that is not exactly two numeric fields.
#[must_use]
pub fn parse_pace(pace: &str) -> Option<u32> {
    let (minutes, seconds) = pace.trim().split_once(':')?;
    let minutes: u32 = minutes.trim().parse().ok()?;
    let seconds: u32 = seconds.trim().parse().ok()?;
    total_seconds(0, minutes, seconds)
}

/// `h:mm:ss` fields to seconds, `None` when the total does not fit in a `u32`
fn total_seconds(hours: u32, minutes: u32, seconds: u32) -> Option<u32> {
    hours
        .checked_mul(SECONDS_PER_HOUR)?
        .checked_add(minutes.checked_mul(SECONDS_PER_MINUTE)?)?
        .checked_add(seconds)
}

fn split_fields(time: &str) -> Option<Vec<u32>> {
    time.trim()
        .split(':')
        .map(|part| part.trim().parse::<u32>().ok())
        .collect()
}

/// Parse a race time (`m:ss` or `h:mm:ss`) into seconds
///
/// Malformed input, or a time too large to count in seconds, yields `0`.
/// The fitness estimator treats a zero time as faster than any table entry,
/// so callers that care must validate first with [`try_parse_time`].
#[must_use]
pub fn parse_time(time: &str) -> u32 {
    match split_fields(time).as_deref() {
        Some(&[minutes, seconds]) => total_seconds(0, minutes, seconds),
        Some(&[hours, minutes, seconds]) => total_seconds(hours, minutes, seconds),
        _ => None,
    }
    .unwrap_or(0)
}

/// Strictly parse a race time, rejecting malformed or zero values
///
/// # Errors
///
/// Returns `AppError` with `InvalidFormat` when the value is not `m:ss` or
/// `h:mm:ss`, when a seconds/minutes field is 60 or more where it should be a
/// sub-field, when the total is zero, or when it does not fit in a `u32`.
pub fn try_parse_time(time: &str) -> AppResult<u32> {
    let invalid = || {
        AppError::invalid_format(format!(
            "Cannot parse time '{time}': expected m:ss or h:mm:ss"
        ))
    };

    let fields = split_fields(time).ok_or_else(invalid)?;
    let seconds = match *fields.as_slice() {
        [minutes, seconds] if seconds < SECONDS_PER_MINUTE => {
            total_seconds(0, minutes, seconds)
        }
        [hours, minutes, seconds]
            if minutes < SECONDS_PER_MINUTE && seconds < SECONDS_PER_MINUTE =>
        {
            total_seconds(hours, minutes, seconds)
        }
        _ => None,
    }
    .ok_or_else(invalid)?;

    if seconds == 0 {
        return Err(invalid());
    }
    Ok(seconds)
}

/// Format a duration in seconds as `m:ss` or `h:mm:ss`
#[must_use]
pub fn format_time(seconds: f64) -> String {
    let total = round_seconds(seconds);
    let hours = total / SECONDS_PER_HOUR;
    let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let secs = total % SECONDS_PER_MINUTE;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}
