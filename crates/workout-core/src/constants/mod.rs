// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversions, formula coefficients, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain. All of them are fixed at build time;
//! nothing in the workspace reads formula coefficients from configuration.

/// Unit conversion and measurement constants
pub mod units;

/// Empirical coefficients used by the training formulas
pub mod training;

/// Service identifiers used in structured logging
pub mod service_names {
    /// Name reported by the report binary
    pub const WORKOUT_REPORT: &str = "workout-report";
}

/// Environment variable names read by configuration loaders
pub mod env_config {
    /// Output format for rendered summaries
    pub const OUTPUT_FORMAT: &str = "WORKOUT_OUTPUT_FORMAT";
    /// Language of the rendered summary labels
    pub const LOCALE: &str = "WORKOUT_LOCALE";
    /// Enables parallel batch computation
    pub const PARALLEL: &str = "WORKOUT_PARALLEL";
}
