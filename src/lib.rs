// ABOUTME: Main library entry point for the workout tracker
// ABOUTME: Computes distance, mean speed, and calories for running, walking, and swimming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Tracker
//!
//! Turns raw sensor-style workout measurements (step or stroke counts,
//! duration, weight and a few per-sport extras) into distance, mean speed and
//! calories burned, and renders a one-line summary.
//!
//! ## Architecture
//!
//! - **Training**: the shared record plus the `Running`, `SportsWalking` and
//!   `Swimming` variants, dispatched through the `Training` enum
//! - **Formatters**: the immutable `InfoMessage` snapshot and its renderings
//! - **Packages**: workout code + positional values → training variant
//! - **Batch**: order-preserving summaries for many packages
//! - **Config / Logging**: environment-driven settings and tracing setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use workout_tracker::errors::AppResult;
//! use workout_tracker::packages::read_package;
//!
//! fn main() -> AppResult<()> {
//!     let training = read_package("RUN", &[15_000.0, 1.0, 75.0])?;
//!     println!("{}", training.show_training_info()?.render_message());
//!     Ok(())
//! }
//! ```

/// Unified error handling (re-exported from `workout-core`)
pub use workout_core::errors;

/// Unit and formula constants (re-exported from `workout-core`)
pub use workout_core::constants;

/// Workout codes (re-exported from `workout-core`)
pub use workout_core::models;

/// Training record, variants, and their formulas
pub mod training;

/// Summary snapshot and output formats
pub mod formatters;

/// Workout package parsing and dispatch
pub mod packages;

/// Batch summaries over many packages
pub mod batch;

/// Environment-driven configuration
pub mod config;

/// Tracing subscriber setup
pub mod logging;
