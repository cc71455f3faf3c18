// ABOUTME: Workout calculation engine: calculators, formula constants, and package reader
// ABOUTME: Turns raw sensor packages into distance, speed, and calorie summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Per-workout distance, speed, and calorie calculators
pub mod calculator;
/// Sensor package reader selecting the calculator for a workout code
pub mod factory;
/// Formula coefficients
pub mod workout_constants;

pub use calculator::{Running, SessionInputs, SportsWalking, Swimming, WorkoutCalculator};
pub use factory::{read_package, read_sensor_package};
