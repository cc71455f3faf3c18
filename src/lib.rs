// ABOUTME: Main library entry point for the workout tracker
// ABOUTME: Converts raw tracker readings into distance, speed, and calorie reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Tracker
//!
//! Reads sensor packages from a fitness tracker (`("SWM", [720, 1, 80, 25, 40])`)
//! and reports distance, mean speed, and calories burned for each workout.
//!
//! ## Architecture
//!
//! - **Intelligence**: per-workout calculators and the package reader
//! - **Formatters**: localized text and JSON report lines
//! - **Services**: batch processing with unknown-code skipping
//! - **Config**: environment-driven settings
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use workout_tracker::errors::AppResult;
//! use workout_tracker::formatters::{Reporter, ReportLocale};
//! use workout_tracker::models::SensorPackage;
//! use workout_tracker::services::WorkoutBatchProcessor;
//!
//! fn main() -> AppResult<()> {
//!     let summary = WorkoutBatchProcessor::process(&SensorPackage::sample_batch())?;
//!     for line in summary.render(&Reporter::new(ReportLocale::Russian))? {
//!         println!("{line}");
//!     }
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Error types (re-exported from workout-core)
pub mod errors;

/// Report rendering in text and JSON
pub mod formatters;

/// Workout calculators and the sensor package reader
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Workout data models (re-exported from workout-core)
pub mod models;

/// Batch processing services
pub mod services;
