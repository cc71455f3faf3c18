// ABOUTME: Service layer orchestrating batch processing of sensor packages
// ABOUTME: Connects the package reader, calculators, and reporter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Batch processing and JSON batch loading
pub mod workout_batch;

pub use workout_batch::{load_packages, BatchLine, BatchSummary, WorkoutBatchProcessor};
