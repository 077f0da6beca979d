// ABOUTME: Turns a scheduled workout type and distance into a concrete session description
// ABOUTME: Produces titles, coaching text, target paces, duration estimates and interval/tempo segments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use pierre_plan_core::models::{
    Paces, RaceDistance, Segment, SegmentType, Workout, WorkoutType,
};

use crate::plan_constants::duration::{
    EASY_MIN_PER_KM, INTERVAL_MIN_PER_KM, RECOVERY_MIN_PER_KM, TEMPO_MIN_PER_KM,
};
use crate::plan_constants::workout_structure::{
    COOLDOWN_KM, INTERVAL_RECOVERY_KM, INTERVAL_REP_KM, KM_PER_INTERVAL_REP, MAX_INTERVAL_REPS,
    TEMPO_MAIN_MAX_KM, TEMPO_MAIN_SHARE, WARMUP_KM,
};

/// Descriptive content of one session, before it is placed on a date
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutDetails {
    /// Short title
    pub title: String,
    /// Coaching description
    pub description: String,
    /// Target pace (None for rest days)
    pub target_pace: Option<String>,
    /// Rough duration estimate in minutes
    pub duration_minutes: Option<u32>,
    /// Structured steps (tempo and interval sessions only)
    pub segments: Option<Vec<Segment>>,
}

fn estimate_minutes(distance_km: u32, minutes_per_km: f64) -> Option<u32> {
    (distance_km > 0).then(|| (f64::from(distance_km) * minutes_per_km).round() as u32)
}

/// Threshold kilometres inside a tempo run of `distance_km`
#[must_use]
pub fn tempo_main_km(distance_km: u32) -> f64 {
    (f64::from(distance_km) * TEMPO_MAIN_SHARE)
        .round()
        .min(TEMPO_MAIN_MAX_KM)
}

/// Number of 1 km repeats for an interval session of `distance_km`
#[must_use]
pub fn interval_reps(distance_km: u32) -> u32 {
    (distance_km / KM_PER_INTERVAL_REP).min(MAX_INTERVAL_REPS)
}

fn tempo(distance_km: u32, paces: &Paces) -> WorkoutDetails {
    let main_km = tempo_main_km(distance_km);
    WorkoutDetails {
        title: WorkoutType::Tempo.label().to_owned(),
        description: format!(
            "{WARMUP_KM:.0} km easy warmup, {main_km:.0} km at threshold pace ({}), \
             {COOLDOWN_KM:.0} km easy cooldown. Comfortably hard: you can speak a few words \
             at a time but not hold a conversation.",
            paces.threshold
        ),
        target_pace: Some(paces.threshold.clone()),
        duration_minutes: estimate_minutes(distance_km, TEMPO_MIN_PER_KM),
        segments: Some(vec![
            Segment::distance(SegmentType::Warmup, WARMUP_KM, &paces.easy),
            Segment::distance(SegmentType::Main, main_km, &paces.threshold),
            Segment::distance(SegmentType::Cooldown, COOLDOWN_KM, &paces.easy),
        ]),
    }
}

fn intervals(distance_km: u32, paces: &Paces) -> WorkoutDetails {
    let reps = interval_reps(distance_km);
    WorkoutDetails {
        title: WorkoutType::Interval.label().to_owned(),
        description: format!(
            "{WARMUP_KM:.0} km easy warmup, then {reps} x {INTERVAL_REP_KM:.0} km at interval \
             pace ({}) with {:.0} m easy jog between repeats, then {COOLDOWN_KM:.0} km easy \
             cooldown.",
            paces.interval,
            INTERVAL_RECOVERY_KM * 1000.0
        ),
        target_pace: Some(paces.interval.clone()),
        duration_minutes: estimate_minutes(distance_km, INTERVAL_MIN_PER_KM),
        segments: Some(vec![
            Segment::distance(SegmentType::Warmup, WARMUP_KM, &paces.easy),
            Segment::distance(SegmentType::Main, INTERVAL_REP_KM, &paces.interval).repeated(reps),
            Segment::distance(SegmentType::Recovery, INTERVAL_RECOVERY_KM, &paces.easy)
                .repeated(reps),
            Segment::distance(SegmentType::Cooldown, COOLDOWN_KM, &paces.easy),
        ]),
    }
}

/// Describe a session of `workout_type` covering `distance_km`
#[must_use]
pub fn synthesize(
    workout_type: WorkoutType,
    distance_km: u32,
    paces: &Paces,
    race_distance: RaceDistance,
) -> WorkoutDetails {
    match workout_type {
        WorkoutType::Easy => WorkoutDetails {
            title: workout_type.label().to_owned(),
            description: format!(
                "{distance_km} km at a relaxed, conversational pace ({}). Keep the effort \
                 low and focus on time on your feet.",
                paces.easy
            ),
            target_pace: Some(paces.easy.clone()),
            duration_minutes: estimate_minutes(distance_km, EASY_MIN_PER_KM),
            segments: None,
        },
        WorkoutType::Long => WorkoutDetails {
            title: workout_type.label().to_owned(),
            description: format!(
                "{distance_km} km at easy pace ({}). Builds endurance; practice the fueling \
                 and hydration you plan to use on race day.",
                paces.easy
            ),
            target_pace: Some(paces.easy.clone()),
            duration_minutes: estimate_minutes(distance_km, EASY_MIN_PER_KM),
            segments: None,
        },
        WorkoutType::Tempo => tempo(distance_km, paces),
        WorkoutType::Interval => intervals(distance_km, paces),
        WorkoutType::Recovery => {
            let pace = format!("{}+", paces.easy_upper());
            WorkoutDetails {
                title: workout_type.label().to_owned(),
                description: format!(
                    "{distance_km} km very easy, slower than {}. Should feel almost too easy.",
                    paces.easy_upper()
                ),
                target_pace: Some(pace),
                duration_minutes: estimate_minutes(distance_km, RECOVERY_MIN_PER_KM),
                segments: None,
            }
        }
        WorkoutType::Rest => WorkoutDetails {
            title: workout_type.label().to_owned(),
            description: "Take the day off or do light cross-training such as cycling or \
                          swimming."
                .to_owned(),
            target_pace: None,
            duration_minutes: None,
            segments: None,
        },
        WorkoutType::Race => WorkoutDetails {
            title: format!("{}: {}", workout_type.label(), race_distance.label()),
            description: format!(
                "Race day! Trust your training. Start controlled around {} and run your {} \
                 km {} strong to the finish.",
                paces.marathon,
                race_distance.kilometers(),
                race_distance.label().to_lowercase()
            ),
            target_pace: Some(paces.marathon.clone()),
            duration_minutes: None,
            segments: None,
        },
    }
}

/// Build the workout record for one day
#[must_use]
pub fn create_workout(
    workout_type: WorkoutType,
    distance_km: u32,
    paces: &Paces,
    date: NaiveDate,
    day_of_week: u8,
    race_distance: RaceDistance,
) -> Workout {
    let details = synthesize(workout_type, distance_km, paces, race_distance);
    Workout {
        day_of_week,
        date,
        workout_type,
        title: details.title,
        description: details.description,
        distance_km: (distance_km > 0).then(|| f64::from(distance_km)),
        duration_minutes: details.duration_minutes,
        target_pace: details.target_pace,
        segments: details.segments,
        completed: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::derive_paces;

    fn paces() -> Paces {
        derive_paces(50.0)
    }

    #[test]
    fn test_interval_rep_count() {
        assert_eq!(interval_reps(10), 5);
        assert_eq!(interval_reps(7), 3);
        assert_eq!(interval_reps(20), 6);
        assert_eq!(interval_reps(2), 1);
        assert_eq!(interval_reps(1), 0);
        assert_eq!(interval_reps(0), 0);
    }

    #[test]
    fn test_titles_follow_workout_labels() {
        for workout_type in [
            WorkoutType::Easy,
            WorkoutType::Long,
            WorkoutType::Tempo,
            WorkoutType::Interval,
            WorkoutType::Recovery,
            WorkoutType::Rest,
        ] {
            let details = synthesize(workout_type, 8, &paces(), RaceDistance::Half);
            assert_eq!(details.title, workout_type.label());
        }
    }

    #[test]
    fn test_ten_km_interval_session() {
        let details = synthesize(WorkoutType::Interval, 10, &paces(), RaceDistance::TenK);
        let segments = details.segments.unwrap();
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[1].segment_type, SegmentType::Main);
        assert_eq!(segments[1].repeat, Some(5));
        assert_eq!(segments[1].pace.as_deref(), Some("3:54"));
        assert_eq!(segments[2].repeat, Some(5));
        assert_eq!(details.duration_minutes, Some(50));
        assert!(details.description.contains("5 x 1 km"));
    }

    #[test]
    fn test_tempo_main_portion_is_capped() {
        assert!((tempo_main_km(8) - 5.0).abs() < f64::EPSILON);
        assert!((tempo_main_km(20) - 8.0).abs() < f64::EPSILON);

        let details = synthesize(WorkoutType::Tempo, 8, &paces(), RaceDistance::Half);
        let segments = details.segments.unwrap();
        assert_eq!(segments[1].pace.as_deref(), Some("4:18"));
        assert_eq!(details.target_pace.as_deref(), Some("4:18"));
        assert_eq!(details.duration_minutes, Some(44));
    }

    #[test]
    fn test_recovery_pace_is_open_ended() {
        let details = synthesize(WorkoutType::Recovery, 5, &paces(), RaceDistance::FiveK);
        assert_eq!(details.target_pace.as_deref(), Some("5:48+"));
        assert_eq!(details.duration_minutes, Some(35));
    }

    #[test]
    fn test_rest_has_nothing_to_run() {
        let details = synthesize(WorkoutType::Rest, 0, &paces(), RaceDistance::FiveK);
        assert!(details.target_pace.is_none());
        assert!(details.duration_minutes.is_none());
        assert!(details.segments.is_none());
    }

    #[test]
    fn test_race_uses_marathon_pace() {
        let details = synthesize(WorkoutType::Race, 0, &paces(), RaceDistance::Full);
        assert_eq!(details.target_pace.as_deref(), Some("4:36"));
        assert_eq!(details.title, "Race day: Marathon");
        assert!(details.description.contains("42.195 km marathon"));
        assert!(details.duration_minutes.is_none());
    }

    #[test]
    fn test_zero_distance_is_omitted_from_record() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        let race = create_workout(WorkoutType::Race, 0, &paces(), date, 7, RaceDistance::TenK);
        assert!(race.distance_km.is_none());
        assert!(!race.completed);

        let easy = create_workout(WorkoutType::Easy, 6, &paces(), date, 2, RaceDistance::TenK);
        assert_eq!(easy.distance_km, Some(6.0));
        assert_eq!(easy.duration_minutes, Some(39));
    }
}
