// ABOUTME: Core types and constants for the workout tracker
// ABOUTME: Foundation crate with error handling, unit constants, and workout codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Foundation crate providing shared types and constants for workout
//! statistics. Nothing here performs a calculation; the formulas live in the
//! `workout_tracker` crate and reference these constants by name.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Unit conversions and the empirical formula coefficients
//! - **models**: Workout type codes used to select a training variant

/// Unified error handling system with standard error codes
pub mod errors;

/// Unit conversion and formula constants organized by domain
pub mod constants;

/// Core data models (workout codes)
pub mod models;
