// ABOUTME: Running workout with the speed-scaled calorie formula
// ABOUTME: Uses step length and the base mean-speed formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::record::TrainingRecord;
use crate::constants::training::{running, STEP_LENGTH_M};
use crate::constants::units::{METERS_PER_KM, MINUTES_PER_HOUR};
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};

/// A running session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Running {
    record: TrainingRecord,
}

impl Running {
    /// Create a running session from step count, hours and weight
    #[must_use]
    pub const fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            record: TrainingRecord::new(action_count, duration_hours, weight_kg, STEP_LENGTH_M),
        }
    }

    /// Shared measurements
    #[must_use]
    pub const fn record(&self) -> &TrainingRecord {
        &self.record
    }

    /// Calories burned
    ///
    /// Formula: `((18 × speed − 20) × weight / 1000) × minutes`
    ///
    /// Not clamped: very low speeds yield a negative value.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::DivisionByZero` if the duration is zero
    #[allow(clippy::suboptimal_flops)] // keep each step separately rounded
    pub fn spent_calories(&self) -> AppResult<f64> {
        let mean_speed = self.record.mean_speed_kmh()?;
        let minutes = self.record.duration_hours() * MINUTES_PER_HOUR;

        Ok((running::CALORIES_SPEED_MULTIPLIER * mean_speed - running::CALORIES_SPEED_SHIFT)
            * self.record.weight_kg()
            / METERS_PER_KM
            * minutes)
    }
}
