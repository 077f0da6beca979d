// ABOUTME: Core types for the Pierre training plan generator
// ABOUTME: Foundation crate with error handling, plan domain models, and pace/time units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Plan Core
//!
//! Shared types for the training plan generator. The engine crate and the
//! planner service both depend on this crate and nothing here performs I/O.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode` and the serializable error envelope
//! - **models**: race, pace, workout and plan value objects
//! - **units**: `m:ss` / `h:mm:ss` parsing and formatting

/// Unified error handling system with standard error codes
pub mod errors;

/// Plan domain models
pub mod models;

/// Pace and time parsing/formatting
pub mod units;
