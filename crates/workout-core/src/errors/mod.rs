// ABOUTME: Unified error type and error codes shared by every workout crate
// ABOUTME: Maps failures to stable codes, descriptions, and process exit statuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the workout crates returns [`AppResult`]. An
//! [`AppError`] carries a stable [`ErrorCode`], a human-readable message and
//! an optional source error for chaining.
//!
//! Errors are local to a single computation: a failing training record never
//! leaves global state behind, so callers processing many records can keep
//! going after one fails.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input could not be interpreted
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required positional argument is missing
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// Input has the wrong shape (e.g. a malformed package string)
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// A numeric value cannot be used in its slot
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,
    /// Workout type tag is not one of the known codes
    #[serde(rename = "UNKNOWN_WORKOUT_TYPE")]
    UnknownWorkoutType = 3004,

    // Arithmetic (4000-4999)
    /// A formula divisor evaluated to exactly zero
    #[serde(rename = "DIVISION_BY_ZERO")]
    DivisionByZero = 4000,

    // Configuration (6000-6999)
    /// Configuration is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Output could not be serialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Process exit status reported by command-line drivers for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            // EX_DATAERR
            Self::InvalidInput
            | Self::MissingRequiredField
            | Self::InvalidFormat
            | Self::ValueOutOfRange
            | Self::UnknownWorkoutType
            | Self::DivisionByZero => 65,

            // EX_CONFIG
            Self::ConfigInvalid => 78,

            // EX_SOFTWARE
            Self::SerializationError => 70,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required value is missing",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::UnknownWorkoutType => "The workout type is not recognized",
            Self::DivisionByZero => "A calculation divided by zero",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Process exit status for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.code.exit_code()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error form, used when reports are emitted as JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Code and message of a failed computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message.clone(),
            },
        }
    }
}

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Missing positional value
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("missing value for '{}'", field.into()),
        )
    }

    /// Malformed input
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Value cannot be used in its slot
    #[must_use]
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Workout tag did not match any known code
    #[must_use]
    pub fn unknown_workout_type(tag: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::UnknownWorkoutType,
            format!("unknown workout type '{}'", tag.into()),
        )
    }

    /// A formula divisor was zero
    #[must_use]
    pub fn division_by_zero(divisor: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::DivisionByZero,
            format!("{} must be non-zero", divisor.into()),
        )
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_exit_status() {
        assert_eq!(ErrorCode::UnknownWorkoutType.exit_code(), 65);
        assert_eq!(ErrorCode::DivisionByZero.exit_code(), 65);
        assert_eq!(ErrorCode::ConfigInvalid.exit_code(), 78);
        assert_eq!(ErrorCode::SerializationError.exit_code(), 70);
    }

    #[test]
    fn test_display_includes_description_and_message() {
        let error = AppError::division_by_zero("duration");
        assert_eq!(
            error.to_string(),
            "A calculation divided by zero: duration must be non-zero"
        );
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::unknown_workout_type("XYZ");
        let response = ErrorResponse::from(&error);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("UNKNOWN_WORKOUT_TYPE"));
        assert!(json.contains("XYZ"));
    }

    #[test]
    fn test_source_is_preserved() {
        let parse_error = "abc".parse::<f64>().unwrap_err();
        let error = AppError::invalid_input("bad number").with_source(parse_error);
        assert!(std::error::Error::source(&error).is_some());
    }
}
