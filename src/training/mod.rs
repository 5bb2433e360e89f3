// ABOUTME: Training variants and the enum that dispatches their formulas
// ABOUTME: Produces an immutable InfoMessage snapshot per computed workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training Calculation Module
//!
//! A workout is one of a closed set of variants. All variants share a
//! [`TrainingRecord`] of raw measurements and the base distance formula;
//! each supplies its own calorie formula, and swimming also replaces the
//! mean-speed formula.
//!
//! # Design
//!
//! - **Enum dispatch**: [`Training`] matches on the variant, so there is no
//!   base type whose calorie operation could be called without a formula.
//! - **Pure arithmetic**: every operation is a function of the stored
//!   measurements. Results are recomputed on each call and never cached.
//! - **Zero divisors fail**: a zero duration (or zero height for walking)
//!   yields `ErrorCode::DivisionByZero` instead of an infinite or NaN value.
//!
//! # Example
//!
//! ```rust,no_run
//! use workout_tracker::training::{Running, Training};
//!
//! let training = Training::from(Running::new(15_000, 1.0, 75.0));
//! let info = training.show_training_info()?;
//! println!("{}", info.render_message());
//! # Ok::<(), workout_tracker::errors::AppError>(())
//! ```

mod arithmetic;
mod record;
mod running;
mod swimming;
mod walking;

pub use arithmetic::{checked_div, floor_div};
pub use record::TrainingRecord;
pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::errors::AppResult;
use crate::formatters::InfoMessage;
use crate::models::WorkoutCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A workout of one concrete type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Training {
    /// Running, step based
    Running(Running),
    /// Sports walking, step based with height
    SportsWalking(SportsWalking),
    /// Pool swimming, stroke based with pool data
    Swimming(Swimming),
}

impl Training {
    /// Shared measurements of the underlying variant
    #[must_use]
    pub const fn record(&self) -> &TrainingRecord {
        match self {
            Self::Running(running) => running.record(),
            Self::SportsWalking(walking) => walking.record(),
            Self::Swimming(swimming) => swimming.record(),
        }
    }

    /// Variant name shown in rendered summaries
    #[must_use]
    pub const fn training_type(&self) -> &'static str {
        match self {
            Self::Running(_) => "Running",
            Self::SportsWalking(_) => "SportsWalking",
            Self::Swimming(_) => "Swimming",
        }
    }

    /// Workout code that selects this variant
    #[must_use]
    pub const fn code(&self) -> WorkoutCode {
        match self {
            Self::Running(_) => WorkoutCode::Run,
            Self::SportsWalking(_) => WorkoutCode::Wlk,
            Self::Swimming(_) => WorkoutCode::Swm,
        }
    }

    /// Distance covered, in kilometers
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.record().distance_km()
    }

    /// Mean speed in km/h, using the swimming override where it applies
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::DivisionByZero` if the duration is zero
    pub fn mean_speed_kmh(&self) -> AppResult<f64> {
        match self {
            Self::Running(running) => running.record().mean_speed_kmh(),
            Self::SportsWalking(walking) => walking.record().mean_speed_kmh(),
            Self::Swimming(swimming) => swimming.mean_speed_kmh(),
        }
    }

    /// Calories burned, using the variant's empirical formula
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::DivisionByZero` if the duration is zero, or for
    /// sports walking if the height is zero
    pub fn spent_calories_kcal(&self) -> AppResult<f64> {
        match self {
            Self::Running(running) => running.spent_calories(),
            Self::SportsWalking(walking) => walking.spent_calories(),
            Self::Swimming(swimming) => swimming.spent_calories(),
        }
    }

    /// Compute every statistic and package it as an immutable snapshot
    ///
    /// # Errors
    ///
    /// Propagates any division failure from the mean speed or calorie formulas
    pub fn show_training_info(&self) -> AppResult<InfoMessage> {
        let distance = self.distance_km();
        let speed = self.mean_speed_kmh()?;
        let calories = self.spent_calories_kcal()?;

        debug!(
            training_type = self.training_type(),
            distance_km = distance,
            mean_speed_kmh = speed,
            calories_kcal = calories,
            "Computed training summary"
        );

        Ok(InfoMessage::new(
            self.training_type(),
            self.record().duration_hours(),
            distance,
            speed,
            calories,
        ))
    }
}

impl From<Running> for Training {
    fn from(running: Running) -> Self {
        Self::Running(running)
    }
}

impl From<SportsWalking> for Training {
    fn from(walking: SportsWalking) -> Self {
        Self::SportsWalking(walking)
    }
}

impl From<Swimming> for Training {
    fn from(swimming: Swimming) -> Self {
        Self::Swimming(swimming)
    }
}
