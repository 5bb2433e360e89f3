// ABOUTME: Empirical coefficients for distance and calorie formulas per workout type
// ABOUTME: Values are fixed at design time and shared by every training record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Distance covered by one step, in meters (running and sports walking)
pub const STEP_LENGTH_M: f64 = 0.65;

/// Distance covered by one stroke, in meters (swimming)
pub const STROKE_LENGTH_M: f64 = 1.38;

/// Running calorie formula: `((SPEED_MULTIPLIER * speed - SPEED_SHIFT) * weight / 1000) * minutes`
pub mod running {
    /// Multiplier applied to mean speed
    pub const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
    /// Subtracted from the scaled mean speed
    pub const CALORIES_SPEED_SHIFT: f64 = 20.0;
}

/// Sports walking calorie formula:
/// `(WEIGHT_MULTIPLIER * weight + (speed² // height) * SPEED_HEIGHT_MULTIPLIER * weight) * minutes`
pub mod walking {
    /// Per-kilogram base burn rate
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Multiplier for the floored speed²/height term
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming calorie formula: `(speed + SPEED_SHIFT) * WEIGHT_MULTIPLIER * weight`
pub mod swimming {
    /// Added to mean speed
    pub const CALORIES_SPEED_SHIFT: f64 = 1.1;
    /// Multiplier applied to weight
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;
}
