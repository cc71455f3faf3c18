// ABOUTME: Workout data models re-exported from workout-core
// ABOUTME: WorkoutType, WorkoutRecord, and SensorPackage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use workout_core::models::*;
