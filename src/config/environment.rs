// ABOUTME: Environment configuration for the report driver
// ABOUTME: Parses output format, label language, and batch mode with lenient fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration for report generation

use crate::constants::env_config;
use crate::errors::AppResult;
use crate::formatters::{MessageLocale, OutputFormat};
use crate::logging::LoggingConfig;
use std::env;
use tracing::info;

/// Report settings resolved from the environment
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    /// How each summary is rendered
    pub output_format: OutputFormat,
    /// Language of text labels
    pub locale: MessageLocale,
    /// Compute summaries on the rayon thread pool
    pub parallel: bool,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl ReportConfig {
    /// Load configuration from environment variables
    ///
    /// Unrecognized output settings fall back to their defaults; only the log
    /// filter is checked, since a bad one would silence logging entirely.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if `RUST_LOG` is not a valid filter
    pub fn from_env() -> AppResult<Self> {
        let output_format = env::var(env_config::OUTPUT_FORMAT)
            .map(|value| OutputFormat::from_str_param(&value))
            .unwrap_or_default();
        let locale = env::var(env_config::LOCALE)
            .map(|value| MessageLocale::from_str_or_default(&value))
            .unwrap_or_default();
        let parallel = env::var(env_config::PARALLEL)
            .map(|value| parse_flag(&value))
            .unwrap_or(false);

        let logging = LoggingConfig::from_env();
        logging.env_filter()?;

        Ok(Self {
            output_format,
            locale,
            parallel,
            logging,
        })
    }

    /// Log a summary of the effective configuration
    pub fn log_summary(&self) {
        info!(
            output.format = %self.output_format,
            output.locale = %self.locale,
            batch.parallel = self.parallel,
            "Report configuration loaded"
        );
    }
}

/// Interpret common truthy spellings
#[must_use]
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" yes "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }
}
