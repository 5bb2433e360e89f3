// ABOUTME: Unit tests for environment-driven report configuration
// ABOUTME: Validates parsing, lenient fallbacks, and logging settings from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use workout_tracker::config::ReportConfig;
use workout_tracker::constants::env_config;
use workout_tracker::errors::ErrorCode;
use workout_tracker::formatters::{MessageLocale, OutputFormat};
use workout_tracker::logging::LogFormat;

const VARS: [&str; 6] = [
    env_config::OUTPUT_FORMAT,
    env_config::LOCALE,
    env_config::PARALLEL,
    "LOG_FORMAT",
    "SERVICE_NAME",
    "RUST_LOG",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = ReportConfig::from_env().unwrap();
    assert_eq!(config.output_format, OutputFormat::Text);
    assert_eq!(config.locale, MessageLocale::English);
    assert!(!config.parallel);
    assert_eq!(config.logging.format, LogFormat::Compact);
    assert_eq!(config.logging.service_name, "workout-report");
}

#[test]
#[serial]
fn test_values_from_environment() {
    clear_env();
    env::set_var(env_config::OUTPUT_FORMAT, "json-pretty");
    env::set_var(env_config::LOCALE, "ru");
    env::set_var(env_config::PARALLEL, "true");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("SERVICE_NAME", "nightly-report");

    let config = ReportConfig::from_env().unwrap();
    assert_eq!(config.output_format, OutputFormat::JsonPretty);
    assert_eq!(config.locale, MessageLocale::Russian);
    assert!(config.parallel);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.logging.service_name, "nightly-report");

    clear_env();
}

#[test]
#[serial]
fn test_unrecognized_values_fall_back() {
    clear_env();
    env::set_var(env_config::OUTPUT_FORMAT, "yaml");
    env::set_var(env_config::LOCALE, "klingon");
    env::set_var(env_config::PARALLEL, "sometimes");

    let config = ReportConfig::from_env().unwrap();
    assert_eq!(config.output_format, OutputFormat::Text);
    assert_eq!(config.locale, MessageLocale::English);
    assert!(!config.parallel);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_log_filter_is_rejected() {
    clear_env();
    env::set_var("RUST_LOG", "workout_tracker=loud");

    let err = ReportConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert_eq!(err.exit_code(), 78);
    assert!(err.message.contains("workout_tracker=loud"));

    clear_env();
}
