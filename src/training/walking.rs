// ABOUTME: Sports walking workout whose calorie formula depends on athlete height
// ABOUTME: The speed-squared over height term uses floor division
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::arithmetic::floor_div;
use super::record::TrainingRecord;
use crate::constants::training::{walking, STEP_LENGTH_M};
use crate::constants::units::MINUTES_PER_HOUR;
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};

/// A sports walking session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SportsWalking {
    record: TrainingRecord,
    height_cm: f64,
}

impl SportsWalking {
    /// Create a walking session from step count, hours, weight and height
    #[must_use]
    pub const fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Self {
        Self {
            record: TrainingRecord::new(action_count, duration_hours, weight_kg, STEP_LENGTH_M),
            height_cm,
        }
    }

    /// Shared measurements
    #[must_use]
    pub const fn record(&self) -> &TrainingRecord {
        &self.record
    }

    /// Athlete height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Calories burned
    ///
    /// Formula: `(0.035 × weight + ⌊speed² / height⌋ × 0.029 × weight) × minutes`
    ///
    /// The floored quotient is part of the empirical formula; for typical
    /// walking speeds and heights it is zero and only the weight term remains.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::DivisionByZero` if the duration or the height is zero
    #[allow(clippy::suboptimal_flops)] // keep each step separately rounded
    pub fn spent_calories(&self) -> AppResult<f64> {
        let mean_speed = self.record.mean_speed_kmh()?;
        let weight = self.record.weight_kg();
        let speed_height_term = floor_div(mean_speed.powi(2), self.height_cm, "height")?;
        let minutes = self.record.duration_hours() * MINUTES_PER_HOUR;

        Ok((walking::CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_height_term * walking::CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * minutes)
    }
}
