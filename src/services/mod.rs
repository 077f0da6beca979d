// ABOUTME: Domain service layer between callers and the pure plan engine
// ABOUTME: Validates requests, applies configuration and wraps engine output in plan records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! The engine trusts its input. Services check requests, apply configured
//! defaults and track the resulting plans.

/// Plan creation, summaries and progress tracking
pub mod plan_service;

pub use plan_service::{
    Plan, PlanRequest, PlanService, PlanStatus, PlanSummary, UPCOMING_WORKOUT_LIMIT,
};
