// ABOUTME: Planner error types re-exported from the core crate
// ABOUTME: Keeps `crate::errors::AppError` paths stable for the service and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Error codes, `AppError` and the JSON error envelope live in
//! `pierre-plan-core`; this module re-exports them for the planner crate.

pub use pierre_plan_core::errors::{
    AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails,
};
