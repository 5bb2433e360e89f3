// ABOUTME: Swimming workout with pool-based mean speed and its own calorie formula
// ABOUTME: Stroke length replaces step length for distance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::arithmetic::checked_div;
use super::record::TrainingRecord;
use crate::constants::training::{swimming, STROKE_LENGTH_M};
use crate::constants::units::{METERS_PER_KM, MINUTES_PER_HOUR};
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};

/// A pool swimming session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swimming {
    record: TrainingRecord,
    pool_length_m: f64,
    pool_laps: u32,
}

impl Swimming {
    /// Create a swimming session from stroke count, hours, weight and pool data
    #[must_use]
    pub const fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    ) -> Self {
        Self {
            record: TrainingRecord::new(action_count, duration_hours, weight_kg, STROKE_LENGTH_M),
            pool_length_m,
            pool_laps,
        }
    }

    /// Shared measurements
    #[must_use]
    pub const fn record(&self) -> &TrainingRecord {
        &self.record
    }

    /// Pool length in meters
    #[must_use]
    pub const fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    /// Number of pool lengths swum
    #[must_use]
    pub const fn pool_laps(&self) -> u32 {
        self.pool_laps
    }

    /// Mean speed derived from pool length and laps
    ///
    /// Formula: `pool_length × laps / 1000 / (duration × 60)`
    ///
    /// Divides by the duration in minutes, unlike the base formula which
    /// divides by hours. Stroke count plays no part here.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::DivisionByZero` if the duration is zero
    pub fn mean_speed_kmh(&self) -> AppResult<f64> {
        let pool_distance_km = self.pool_length_m * f64::from(self.pool_laps) / METERS_PER_KM;
        checked_div(
            pool_distance_km,
            self.record.duration_hours() * MINUTES_PER_HOUR,
            "duration",
        )
    }

    /// Calories burned
    ///
    /// Formula: `(speed + 1.1) × 2 × weight`
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::DivisionByZero` if the duration is zero
    pub fn spent_calories(&self) -> AppResult<f64> {
        let mean_speed = self.mean_speed_kmh()?;
        Ok((mean_speed + swimming::CALORIES_SPEED_SHIFT)
            * swimming::CALORIES_WEIGHT_MULTIPLIER
            * self.record.weight_kg())
    }
}
