// ABOUTME: Core data models shared across the workout crates
// ABOUTME: Currently the workout code used to pick a training variant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Workout type codes (SWM, RUN, WLK)
pub mod workout;

pub use workout::WorkoutCode;
