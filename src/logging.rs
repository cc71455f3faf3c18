// ABOUTME: Logging configuration and structured logging setup for the tracker
// ABOUTME: Configures log levels and formatters; diagnostics go to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging with `tracing`.
//!
//! Reports are the tracker's stdout contract, so every log layer writes to
//! stderr.

use std::io;

use anyhow::{anyhow, Result};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use workout_core::constants::{env_config, service_names};
use workout_core::models::WorkoutRecord;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for machine consumption
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact single-line format
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Compact,
            include_location: false,
            service_name: service_names::WORKOUT_TRACKER.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration through an environment variable lookup
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let format = match lookup(env_config::LOG_FORMAT).as_deref() {
            Some("json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            _ => LogFormat::Compact,
        };

        Self {
            level: lookup(env_config::RUST_LOG).unwrap_or(defaults.level),
            format,
            include_location: lookup(env_config::LOG_INCLUDE_LOCATION).is_some(),
            ..defaults
        }
    }

    /// Raise the level to `debug` (the `--verbose` flag)
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.level = "debug".to_owned();
        self
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if the filter is invalid or a subscriber is already set
    pub fn init(&self) -> Result<()> {
        let env_filter = EnvFilter::try_new(&self.level)
            .map_err(|e| anyhow!("Invalid log filter '{}': {e}", self.level))?;
        let registry = tracing_subscriber::registry().with(env_filter);

        let installed = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };
        installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))?;

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            log.level = %self.level,
            log.format = ?self.format,
            "Workout tracker starting"
        );
        Ok(())
    }
}

/// Tracker-specific structured log events
pub struct AppLogger;

impl AppLogger {
    /// Log a computed workout
    pub fn log_workout(record: &WorkoutRecord) {
        info!(
            workout.kind = %record.workout_type(),
            workout.duration_hours = record.duration_hours(),
            workout.distance_km = record.distance_km(),
            workout.calories_kcal = record.calories_kcal(),
            "Workout summarized"
        );
    }

    /// Log a package skipped for an unknown code
    pub fn log_unknown_workout(code: &str, position: usize) {
        warn!(
            workout.code = %code,
            batch.position = position,
            "Skipping package with unknown workout code"
        );
    }

    /// Log batch totals
    pub fn log_batch_summary(reported: usize, skipped: usize) {
        info!(
            batch.reported = reported,
            batch.skipped = skipped,
            "Batch processed"
        );
    }
}
