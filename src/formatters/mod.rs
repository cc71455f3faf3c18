// ABOUTME: Report rendering for computed workouts in text or JSON form
// ABOUTME: Localized single-line messages with fixed three-decimal numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Report Rendering
//!
//! Turns a [`WorkoutRecord`] into the line printed for the user. Text reports
//! print every number with exactly three decimals (`{:.3}` rounds the exact
//! binary value, so `0.0005` renders as `0.001`). JSON reports serialize the
//! record with full precision.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use workout_tracker::formatters::{Reporter, ReportLocale};
//! use workout_tracker::intelligence::read_package;
//!
//! if let Ok(workout) = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]) {
//!     let reporter = Reporter::new(ReportLocale::English);
//!     println!("{}", reporter.message(&workout.training_info()));
//! }
//! ```

use std::fmt;

use serde_json::json;
use workout_core::errors::{AppError, AppResult};
use workout_core::models::WorkoutRecord;

/// Report line format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Localized human-readable line (default)
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ConfigInvalid` for unrecognized values
    pub fn from_str_param(s: &str) -> AppResult<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::config(format!(
                "Unsupported output format '{other}', expected 'text' or 'json'"
            ))),
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Language of text reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportLocale {
    /// Russian labels, the tracker's native output (default)
    #[default]
    Russian,
    /// English labels
    English,
}

impl ReportLocale {
    /// Parse locale from a language tag such as `ru`, `en`, or `en-US`
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ConfigInvalid` for unsupported languages
    pub fn from_str_param(s: &str) -> AppResult<Self> {
        let language = s.split(['-', '_']).next().unwrap_or_default();
        match language.to_lowercase().as_str() {
            "ru" => Ok(Self::Russian),
            "en" => Ok(Self::English),
            _ => Err(AppError::config(format!(
                "Unsupported report locale '{s}', expected 'ru' or 'en'"
            ))),
        }
    }

    /// Get the language tag
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Russian => "ru",
            Self::English => "en",
        }
    }
}

impl fmt::Display for ReportLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Renders workout records and warnings as output lines
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    locale: ReportLocale,
    format: OutputFormat,
}

impl Reporter {
    /// Text reporter in the given locale
    #[must_use]
    pub const fn new(locale: ReportLocale) -> Self {
        Self {
            locale,
            format: OutputFormat::Text,
        }
    }

    /// Switch the output format
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Locale used for text output
    #[must_use]
    pub const fn locale(&self) -> ReportLocale {
        self.locale
    }

    /// Output format
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// Localized single-line summary of `record`
    #[must_use]
    pub fn message(&self, record: &WorkoutRecord) -> String {
        let label = record.workout_type().label();
        let duration = record.duration_hours();
        let distance = record.distance_km();
        let speed = record.speed_kmh();
        let calories = record.calories_kcal();
        match self.locale {
            ReportLocale::Russian => format!(
                "Тип тренировки: {label}; \
                 Длительность: {duration:.3} ч.; \
                 Дистанция: {distance:.3} км; \
                 Ср. скорость: {speed:.3} км/ч; \
                 Потрачено ккал: {calories:.3}."
            ),
            ReportLocale::English => format!(
                "Workout type: {label}; \
                 Duration: {duration:.3} h; \
                 Distance: {distance:.3} km; \
                 Avg. speed: {speed:.3} km/h; \
                 Calories burned: {calories:.3}."
            ),
        }
    }

    /// Line reported for a package whose code names no known workout
    #[must_use]
    pub fn unknown_workout_warning(&self, code: &str) -> String {
        match self.locale {
            ReportLocale::Russian => format!("Неизвестный тип тренировки: '{code}'"),
            ReportLocale::English => format!("Unknown workout type: '{code}'"),
        }
    }

    /// Render `record` in the configured output format
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `SerializationError` if JSON encoding fails
    pub fn render_record(&self, record: &WorkoutRecord) -> AppResult<String> {
        match self.format {
            OutputFormat::Text => Ok(self.message(record)),
            OutputFormat::Json => Ok(serde_json::to_string(record)?),
        }
    }

    /// Render the unknown-workout warning in the configured output format
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `SerializationError` if JSON encoding fails
    pub fn render_unknown_workout(&self, code: &str) -> AppResult<String> {
        match self.format {
            OutputFormat::Text => Ok(self.unknown_workout_warning(code)),
            OutputFormat::Json => Ok(serde_json::to_string(&json!({
                "warning": "unknown_workout",
                "code": code,
                "message": self.unknown_workout_warning(code),
            }))?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workout_core::errors::ErrorCode;
    use workout_core::models::WorkoutType;

    fn record(distance: f64) -> WorkoutRecord {
        WorkoutRecord::new(WorkoutType::Running, 1.0, distance, 2.0, 3.0)
    }

    #[test]
    fn test_russian_message_layout() {
        let reporter = Reporter::new(ReportLocale::Russian);
        assert_eq!(
            reporter.message(&record(0.7839)),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 0.784 км; \
             Ср. скорость: 2.000 км/ч; Потрачено ккал: 3.000."
        );
    }

    #[test]
    fn test_english_message_layout() {
        let reporter = Reporter::new(ReportLocale::English);
        assert_eq!(
            reporter.message(&record(5.85)),
            "Workout type: Running; Duration: 1.000 h; Distance: 5.850 km; \
             Avg. speed: 2.000 km/h; Calories burned: 3.000."
        );
    }

    #[test]
    fn test_three_decimal_rounding_boundaries() {
        let reporter = Reporter::new(ReportLocale::English);
        assert!(reporter.message(&record(0.0005)).contains("Distance: 0.001 km"));
        assert!(reporter.message(&record(0.000_499_9)).contains("Distance: 0.000 km"));
        assert!(reporter.message(&record(0.999_6)).contains("Distance: 1.000 km"));
    }

    #[test]
    fn test_json_record_rendering() {
        let reporter = Reporter::new(ReportLocale::Russian).with_format(OutputFormat::Json);
        let line = reporter.render_record(&record(5.85)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["workout_type"], "Running");
        assert_eq!(value["distance_km"], 5.85);
    }

    #[test]
    fn test_unknown_workout_warning() {
        let reporter = Reporter::new(ReportLocale::English);
        assert_eq!(
            reporter.render_unknown_workout("YOG").unwrap(),
            "Unknown workout type: 'YOG'"
        );

        let json = reporter
            .with_format(OutputFormat::Json)
            .render_unknown_workout("YOG")
            .unwrap();
        assert!(json.contains("\"code\":\"YOG\""));
    }

    #[test]
    fn test_parse_locale_and_format() {
        assert_eq!(ReportLocale::from_str_param("en-US").unwrap(), ReportLocale::English);
        assert_eq!(ReportLocale::from_str_param("RU").unwrap(), ReportLocale::Russian);
        assert_eq!(
            ReportLocale::from_str_param("de").unwrap_err().code,
            ErrorCode::ConfigInvalid
        );
        assert_eq!(OutputFormat::from_str_param("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str_param("toon").is_err());
    }
}
