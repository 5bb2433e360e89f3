// ABOUTME: Raw measurements shared by every training variant
// ABOUTME: Derives distance and the base mean-speed formula from action count and duration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::arithmetic::checked_div;
use crate::constants::units::METERS_PER_KM;
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};

/// Measurements common to all workouts
///
/// The record only knows how to turn actions into distance and distance into
/// speed. It deliberately has no calorie operation: calories depend on the
/// workout type, so only a [`super::Training`] variant can produce them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingRecord {
    action_count: u32,
    duration_hours: f64,
    weight_kg: f64,
    distance_per_action_m: f64,
}

impl TrainingRecord {
    /// Create a record; the step or stroke length is fixed by the variant
    #[must_use]
    pub const fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        distance_per_action_m: f64,
    ) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
            distance_per_action_m,
        }
    }

    /// Number of steps or strokes
    #[must_use]
    pub const fn action_count(&self) -> u32 {
        self.action_count
    }

    /// Elapsed time in hours
    #[must_use]
    pub const fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    /// Athlete weight in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Meters covered by one action
    #[must_use]
    pub const fn distance_per_action_m(&self) -> f64 {
        self.distance_per_action_m
    }

    /// Distance covered, in kilometers
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        f64::from(self.action_count) * self.distance_per_action_m / METERS_PER_KM
    }

    /// Mean speed over the whole duration, in km/h
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::DivisionByZero` if the duration is zero
    pub fn mean_speed_kmh(&self) -> AppResult<f64> {
        checked_div(self.distance_km(), self.duration_hours, "duration")
    }
}
