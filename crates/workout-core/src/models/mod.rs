// ABOUTME: Core data models for workouts, computed records, and sensor input
// ABOUTME: Re-exports WorkoutType, WorkoutRecord, and SensorPackage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Raw sensor package as read from the tracker
pub mod package;
/// Computed, immutable workout summary
pub mod record;
/// Supported workout kinds
pub mod workout_type;

pub use package::SensorPackage;
pub use record::WorkoutRecord;
pub use workout_type::WorkoutType;
