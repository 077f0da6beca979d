// ABOUTME: Integration tests for the plan service request validation and plan record
// ABOUTME: Covers rejected requests, the error envelope, summaries and plan lifecycle updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use pierre_planner::config::PlannerConfig;
use pierre_planner::errors::{ErrorCode, ErrorResponse};
use pierre_planner::models::{RaceDistance, WorkoutType};
use pierre_planner::services::{
    PlanRequest, PlanService, PlanStatus, UPCOMING_WORKOUT_LIMIT,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
}

fn half_marathon() -> PlanRequest {
    PlanRequest {
        race_name: Some("Riverside Half".to_owned()),
        race_date: NaiveDate::from_ymd_opt(2025, 4, 27),
        distance: Some(RaceDistance::Half),
        target_time: Some("1:45:00".to_owned()),
        city: Some("Lyon".to_owned()),
        weekly_km: Some(40.0),
        days_per_week: Some(5),
        ..PlanRequest::default()
    }
}

fn rejection(request: &PlanRequest) -> ErrorCode {
    PlanService::default()
        .create_plan(request, today())
        .unwrap_err()
        .code
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_blank_race_name_is_missing() {
    let request = PlanRequest {
        race_name: Some("   ".to_owned()),
        ..half_marathon()
    };
    assert_eq!(rejection(&request), ErrorCode::MissingRequiredField);

    let request = PlanRequest {
        race_name: None,
        ..half_marathon()
    };
    assert_eq!(rejection(&request), ErrorCode::MissingRequiredField);
}

#[test]
fn test_missing_date_or_distance() {
    let request = PlanRequest {
        race_date: None,
        ..half_marathon()
    };
    assert_eq!(rejection(&request), ErrorCode::MissingRequiredField);

    let request = PlanRequest {
        distance: None,
        ..half_marathon()
    };
    assert_eq!(rejection(&request), ErrorCode::MissingRequiredField);
}

#[test]
fn test_race_date_must_be_in_the_future() {
    for date in [today(), NaiveDate::from_ymd_opt(2024, 10, 1).unwrap()] {
        let request = PlanRequest {
            race_date: Some(date),
            ..half_marathon()
        };
        assert_eq!(rejection(&request), ErrorCode::ValueOutOfRange);
    }
}

#[test]
fn test_malformed_times_are_rejected() {
    for bad in ["3:75:00", "fast", "1:2:3:4", "0:00", "99999999:00", "9999999:00:00"] {
        let request = PlanRequest {
            target_time: Some(bad.to_owned()),
            ..half_marathon()
        };
        assert_eq!(rejection(&request), ErrorCode::InvalidFormat, "{bad}");
    }

    let request = PlanRequest {
        recent_race_time: Some("forty".to_owned()),
        recent_race_distance: Some(RaceDistance::TenK),
        ..half_marathon()
    };
    assert_eq!(rejection(&request), ErrorCode::InvalidFormat);
}

#[test]
fn test_non_finite_volume_and_empty_sessions() {
    let request = PlanRequest {
        weekly_km: Some(f64::NAN),
        ..half_marathon()
    };
    assert_eq!(rejection(&request), ErrorCode::InvalidInput);

    let request = PlanRequest {
        hours_per_session: Some(0.0),
        ..half_marathon()
    };
    assert_eq!(rejection(&request), ErrorCode::ValueOutOfRange);
}

#[test]
fn test_error_envelope_json() {
    let request = PlanRequest {
        race_date: Some(today()),
        ..half_marathon()
    };
    let error = PlanService::default()
        .create_plan(&request, today())
        .unwrap_err();
    assert_eq!(error.code.exit_code(), 2);

    let value = serde_json::to_value(ErrorResponse::from(error)).unwrap();
    assert_eq!(value["error"]["code"], "VALUE_OUT_OF_RANGE");
    assert!(value["error"]["message"]
        .as_str()
        .unwrap()
        .contains("2025-01-06"));
}

// ============================================================================
// Plan record
// ============================================================================

#[test]
fn test_plan_record_carries_race_metadata() {
    let plan = PlanService::new(PlannerConfig::default())
        .create_plan(&half_marathon(), today())
        .unwrap();

    assert_eq!(plan.status, PlanStatus::Active);
    assert_eq!(plan.race.name, "Riverside Half");
    assert_eq!(plan.race.city.as_deref(), Some("Lyon"));
    assert_eq!(plan.race.target_time.as_deref(), Some("1:45:00"));
    assert_eq!(plan.training_params.total_weeks, 15);
    assert_eq!(plan.weeks.len(), 15);

    let value = serde_json::to_value(&plan).unwrap();
    assert_eq!(value["status"], "active");
    assert!(value["createdAt"].is_string());
    assert_eq!(value["race"]["distance"], "half");
}

#[test]
fn test_each_plan_gets_its_own_id() {
    let service = PlanService::default();
    let first = service.create_plan(&half_marathon(), today()).unwrap();
    let second = service.create_plan(&half_marathon(), today()).unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(first.weeks, second.weeks);
}

#[test]
fn test_summary_totals() {
    let plan = PlanService::default()
        .create_plan(&half_marathon(), today())
        .unwrap();
    let summary = plan.summary();

    assert_eq!(summary.total_weeks, 15);
    let long_runs = plan
        .weeks
        .iter()
        .flat_map(|week| &week.workouts)
        .filter(|workout| workout.workout_type == WorkoutType::Long)
        .count();
    assert_eq!(summary.long_runs, long_runs);
    assert!(summary.quality_sessions > 0);
    assert!(summary.total_km > 0.0);
    assert_eq!(
        summary.peak_week_km,
        plan.weeks.iter().map(|w| w.total_mileage_km).max().unwrap()
    );
    // 1:45:00 sits two thirds of the way from 1:39:00 (46) to 1:48:00 (41)
    assert!((summary.target_vdot.unwrap() - 42.7).abs() < 1e-9);
}

#[test]
fn test_summary_without_goal_time_omits_target_vdot() {
    let request = PlanRequest {
        target_time: None,
        ..half_marathon()
    };
    let summary = PlanService::default()
        .create_plan(&request, today())
        .unwrap()
        .summary();
    assert!(summary.target_vdot.is_none());

    let value = serde_json::to_value(&summary).unwrap();
    assert!(value.get("targetVdot").is_none());
    assert!(value["predictedFinish"].is_string());
}

#[test]
fn test_lifecycle_updates() {
    let mut plan = PlanService::default()
        .create_plan(&half_marathon(), today())
        .unwrap();

    let first = plan.upcoming_workouts(today(), UPCOMING_WORKOUT_LIMIT);
    assert_eq!(first.len(), UPCOMING_WORKOUT_LIMIT);
    let first_day = first[0].day_of_week;

    plan.toggle_workout(1, first_day).unwrap();
    let next = plan.upcoming_workouts(today(), UPCOMING_WORKOUT_LIMIT);
    assert_ne!(next[0].day_of_week, first_day);

    // Sunday of week 1 is the long run
    assert!(plan.toggle_workout(1, 7).unwrap());
    assert!(plan.progress_percent() > 0);

    assert!(plan.toggle_workout(1, 0).is_err());
    assert!(plan.toggle_workout(1, 8).is_err());

    plan.set_status(PlanStatus::Completed);
    assert_eq!(plan.status, PlanStatus::Completed);
}
