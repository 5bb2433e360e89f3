// ABOUTME: Sensor package parsing and dispatch from workout code to training variant
// ABOUTME: Maps positional values onto each variant's constructor and holds the sample packages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout Package Dispatch
//!
//! A sensor package is a workout code plus an ordered list of numbers. The
//! order is fixed per code (see [`WorkoutCode::field_names`]):
//!
//! | Code  | Variant         | Values                                              |
//! |-------|-----------------|-----------------------------------------------------|
//! | `SWM` | `Swimming`      | action, duration, weight, pool length, pool laps    |
//! | `RUN` | `Running`       | action, duration, weight                            |
//! | `WLK` | `SportsWalking` | action, duration, weight, height                    |
//!
//! Unknown codes and mismatched value counts are reported as errors.

use crate::errors::{AppError, AppResult};
use crate::models::WorkoutCode;
use crate::training::{Running, SportsWalking, Swimming, Training};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One workout code with its positional sensor values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPackage {
    /// Which variant the values describe
    pub code: WorkoutCode,
    /// Positional values in the code's order
    pub data: Vec<f64>,
}

impl WorkoutPackage {
    /// Create a package
    #[must_use]
    pub fn new(code: WorkoutCode, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code,
            data: data.into(),
        }
    }

    /// Build the training variant this package describes
    ///
    /// # Errors
    ///
    /// See [`build_training`]
    pub fn read(&self) -> AppResult<Training> {
        build_training(self.code, &self.data)
    }
}

impl fmt::Display for WorkoutPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.code)?;
        for (index, value) in self.data.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Parses `CODE:v1,v2,...`, e.g. `RUN:15000,1,75`; empty slots are rejected
impl FromStr for WorkoutPackage {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tag, values) = s.split_once(':').ok_or_else(|| {
            AppError::invalid_format(format!("expected CODE:v1,v2,... but got '{s}'"))
        })?;
        let code = tag.parse::<WorkoutCode>()?;

        // "RUN:" carries no values and is left to the arity check
        if values.trim().is_empty() {
            return Ok(Self {
                code,
                data: Vec::new(),
            });
        }

        let data = values
            .split(',')
            .map(str::trim)
            .enumerate()
            .map(|(index, value)| parse_value(index, value))
            .collect::<AppResult<Vec<f64>>>()?;

        Ok(Self { code, data })
    }
}

/// Construct a training variant from a workout tag and its positional values
///
/// # Errors
///
/// Returns `ErrorCode::UnknownWorkoutType` for an unrecognized tag, otherwise
/// see [`build_training`]
pub fn read_package(workout_type: &str, data: &[f64]) -> AppResult<Training> {
    build_training(workout_type.parse()?, data)
}

/// Construct a training variant from a workout code and its positional values
///
/// # Errors
///
/// Returns `ErrorCode::MissingRequiredField` if too few values are given,
/// `ErrorCode::InvalidInput` if too many are given, and
/// `ErrorCode::ValueOutOfRange` if a count slot (actions, pool laps) is not a
/// non-negative whole number
pub fn build_training(code: WorkoutCode, data: &[f64]) -> AppResult<Training> {
    let fields = code.field_names();
    if data.len() < fields.len() {
        return Err(AppError::missing_field(fields[data.len()]).with_source(arity_error(code, data)));
    }
    if data.len() > fields.len() {
        return Err(AppError::invalid_input(arity_error(code, data).to_string()));
    }

    let action = whole_count(data[0], "action")?;
    let (duration, weight) = (data[1], data[2]);

    Ok(match code {
        WorkoutCode::Swm => {
            Swimming::new(action, duration, weight, data[3], whole_count(data[4], "pool_laps")?)
                .into()
        }
        WorkoutCode::Run => Running::new(action, duration, weight).into(),
        WorkoutCode::Wlk => SportsWalking::new(action, duration, weight, data[3]).into(),
    })
}

/// The fixed sample packages: one swim, one run, one walk
#[must_use]
pub fn sample_packages() -> Vec<WorkoutPackage> {
    vec![
        WorkoutPackage::new(WorkoutCode::Swm, [720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutPackage::new(WorkoutCode::Run, [15_000.0, 1.0, 75.0]),
        WorkoutPackage::new(WorkoutCode::Wlk, [9000.0, 1.0, 75.0, 180.0]),
    ]
}

#[derive(Debug, Error)]
#[error("{code} expects {expected} values ({fields}) but got {actual}")]
struct ArityError {
    code: WorkoutCode,
    expected: usize,
    fields: String,
    actual: usize,
}

fn arity_error(code: WorkoutCode, data: &[f64]) -> ArityError {
    ArityError {
        code,
        expected: code.arity(),
        fields: code.field_names().join(", "),
        actual: data.len(),
    }
}

/// Parse one positional value; an empty slot would shift every later value
fn parse_value(index: usize, value: &str) -> AppResult<f64> {
    if value.is_empty() {
        return Err(AppError::invalid_format(format!(
            "empty value at position {}",
            index + 1
        )));
    }
    value.parse::<f64>().map_err(|e| {
        AppError::invalid_format(format!("'{value}' is not a number")).with_source(e)
    })
}

fn whole_count(value: f64, field: &str) -> AppResult<u32> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(AppError::out_of_range(format!(
            "{field} must be a non-negative whole number, got {value}"
        )));
    }
    Ok(value as u32)
}
