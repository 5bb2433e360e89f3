// ABOUTME: Configuration module organizing environment-driven report settings
// ABOUTME: Formula constants are not configurable and live in workout-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration management
//!
//! Configuration is read from environment variables only; there are no
//! configuration files.

/// Environment-based report configuration
pub mod environment;

pub use environment::ReportConfig;
