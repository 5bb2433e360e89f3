// ABOUTME: Training summary snapshot and its rendering to text or JSON
// ABOUTME: Text rendering follows a fixed one-line template with two decimals per number
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! [`InfoMessage`] is the immutable result of one training computation.
//! It renders to a human-readable line ([`InfoMessage::render_message`]) or,
//! through [`format_message`], to JSON for machine consumers.
//!
//! ## Supported Formats
//!
//! - **Text**: Default, the fixed summary template
//! - **JSON**: Compact single-line object
//! - **JSON (pretty)**: Indented object for reading
//!
//! ## Usage
//!
//! ```rust,ignore
//! use workout_tracker::formatters::{format_message, MessageLocale, OutputFormat};
//!
//! let line = format_message(&info, OutputFormat::Text, MessageLocale::English)?;
//! ```

use crate::errors::{AppError, AppResult, ErrorResponse};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Computed statistics of one training, ready to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    training_type: String,
    duration: f64,
    distance: f64,
    speed: f64,
    calories: f64,
}

impl InfoMessage {
    /// Capture a computed result
    #[must_use]
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    /// Variant name, e.g. `Running`
    #[must_use]
    pub fn training_type(&self) -> &str {
        &self.training_type
    }

    /// Duration in hours
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Distance in kilometers
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Mean speed in km/h
    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Calories burned in kcal
    #[must_use]
    pub const fn calories(&self) -> f64 {
        self.calories
    }

    /// Render the summary line with English labels
    #[must_use]
    pub fn render_message(&self) -> String {
        self.render_localized(MessageLocale::English)
    }

    /// Render the summary line with labels in the given language
    #[must_use]
    pub fn render_localized(&self, locale: MessageLocale) -> String {
        match locale {
            MessageLocale::English => format!(
                "Training type: {}; Duration: {:.2} h.; Distance: {:.2} km; \
                 Mean speed: {:.2} km/h; Calories burned: {:.2}.",
                self.training_type, self.duration, self.distance, self.speed, self.calories
            ),
            MessageLocale::Russian => format!(
                "Тип тренировки: {}; Длительность: {:.2} ч.; Дистанция: {:.2} км; \
                 Ср. скорость: {:.2} км/ч; Потрачено ккал: {:.2}.",
                self.training_type, self.duration, self.distance, self.speed, self.calories
            ),
        }
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_message())
    }
}

/// Language of the summary labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLocale {
    /// English labels (default)
    #[default]
    English,
    /// Russian labels
    Russian,
}

impl MessageLocale {
    /// Parse a locale tag (case-insensitive), falling back to English
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "ru" | "rus" | "russian" => Self::Russian,
            _ => Self::English,
        }
    }

    /// Short tag for this locale
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Russian => "ru",
        }
    }
}

impl fmt::Display for MessageLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Rendered summary line (default)
    #[default]
    Text,
    /// Single-line JSON object
    Json,
    /// Indented JSON object
    JsonPretty,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "json-pretty" | "pretty" => Self::JsonPretty,
            _ => Self::Text,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::JsonPretty => "json-pretty",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a summary in the requested format
///
/// The locale only affects `Text`; JSON uses field names.
///
/// # Errors
///
/// Returns `ErrorCode::SerializationError` if JSON encoding fails
pub fn format_message(
    message: &InfoMessage,
    format: OutputFormat,
    locale: MessageLocale,
) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(message.render_localized(locale)),
        OutputFormat::Json => Ok(serde_json::to_string(message)?),
        OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(message)?),
    }
}

/// Render a failed computation in the requested format
///
/// # Errors
///
/// Returns `ErrorCode::SerializationError` if JSON encoding fails
pub fn format_error(error: &AppError, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(format!("Error: {error}")),
        OutputFormat::Json => Ok(serde_json::to_string(&ErrorResponse::from(error))?),
        OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(&ErrorResponse::from(error))?),
    }
}
