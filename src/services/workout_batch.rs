// ABOUTME: Batch processing of sensor packages into rendered report lines
// ABOUTME: Skips unknown workout codes with a warning and aborts on malformed packages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::io;
use std::path::Path;

use serde_json::json;
use workout_core::errors::{AppError, AppResult, WorkoutError};
use workout_core::models::{SensorPackage, WorkoutRecord};

use crate::formatters::Reporter;
use crate::intelligence::read_sensor_package;
use crate::logging::AppLogger;

/// Outcome for one package of a batch
#[derive(Debug, Clone, PartialEq)]
pub enum BatchLine {
    /// Package was summarized
    Report(WorkoutRecord),
    /// Package named an unknown workout code and was skipped
    UnknownWorkout(String),
}

/// Per-package outcomes of a processed batch, in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    lines: Vec<BatchLine>,
}

impl BatchSummary {
    /// Outcomes in input order
    #[must_use]
    pub fn lines(&self) -> &[BatchLine] {
        &self.lines
    }

    /// Number of summarized packages
    #[must_use]
    pub fn reported_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line, BatchLine::Report(_)))
            .count()
    }

    /// Number of packages skipped for an unknown code
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.lines.len() - self.reported_count()
    }

    /// Render every outcome as one output line
    ///
    /// # Errors
    ///
    /// Returns an error if JSON rendering fails
    pub fn render(&self, reporter: &Reporter) -> AppResult<Vec<String>> {
        self.lines
            .iter()
            .map(|line| match line {
                BatchLine::Report(record) => reporter.render_record(record),
                BatchLine::UnknownWorkout(code) => reporter.render_unknown_workout(code),
            })
            .collect()
    }
}

/// Processes a batch of sensor packages
pub struct WorkoutBatchProcessor;

impl WorkoutBatchProcessor {
    /// Summarize every package in `packages`.
    ///
    /// Unknown workout codes become [`BatchLine::UnknownWorkout`] and
    /// processing continues with the next package.
    ///
    /// # Errors
    ///
    /// Returns an error for the first package with the wrong number of
    /// parameters or an invalid reading. The error details carry the
    /// package's zero-based position.
    pub fn process(packages: &[SensorPackage]) -> AppResult<BatchSummary> {
        let mut lines = Vec::with_capacity(packages.len());

        for (position, package) in packages.iter().enumerate() {
            match read_sensor_package(package) {
                Ok(workout) => {
                    let record = workout.training_info();
                    AppLogger::log_workout(&record);
                    lines.push(BatchLine::Report(record));
                }
                Err(error) if error.is_recoverable() => {
                    AppLogger::log_unknown_workout(error.code(), position);
                    lines.push(BatchLine::UnknownWorkout(error.code().to_owned()));
                }
                Err(error) => return Err(Self::package_error(error, position)),
            }
        }

        let summary = BatchSummary { lines };
        AppLogger::log_batch_summary(summary.reported_count(), summary.skipped_count());
        Ok(summary)
    }

    fn package_error(error: WorkoutError, position: usize) -> AppError {
        let app_error = AppError::from(error);
        let mut details = app_error.details.clone();
        if let Some(map) = details.as_object_mut() {
            map.insert("position".to_owned(), json!(position));
        }
        let message = format!("Package #{position}: {}", app_error.message);
        AppError::new(app_error.code, message).with_details(details)
    }
}

/// Load a batch from a JSON file holding an array of
/// `{"code": "RUN", "data": [1206, 12, 6]}` objects
///
/// # Errors
///
/// Returns `ResourceNotFound` if the file does not exist, `StorageError` if it
/// cannot be read, and `SerializationError` if it is not a valid batch
pub fn load_packages(path: &Path) -> AppResult<Vec<SensorPackage>> {
    let raw = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            AppError::not_found(format!("Input file '{}'", path.display()))
        } else {
            AppError::storage(format!("Cannot read '{}': {e}", path.display())).with_source(e)
        }
    })?;
    Ok(serde_json::from_str(&raw)?)
}
