// ABOUTME: Immutable summary of one computed workout
// ABOUTME: Holds duration, distance, speed, and calories ready for formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

use super::WorkoutType;

/// Finalized values for one workout.
///
/// Built once per calculation and never mutated; fields are read through
/// accessors so a record cannot drift from the calculator that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkoutRecord {
    workout_type: WorkoutType,
    duration_hours: f64,
    distance_km: f64,
    speed_kmh: f64,
    calories_kcal: f64,
}

impl WorkoutRecord {
    /// Assemble a record from computed values
    #[must_use]
    pub const fn new(
        workout_type: WorkoutType,
        duration_hours: f64,
        distance_km: f64,
        speed_kmh: f64,
        calories_kcal: f64,
    ) -> Self {
        Self {
            workout_type,
            duration_hours,
            distance_km,
            speed_kmh,
            calories_kcal,
        }
    }

    /// Workout type
    #[must_use]
    pub const fn workout_type(&self) -> WorkoutType {
        self.workout_type
    }

    /// Session length in hours
    #[must_use]
    pub const fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    /// Distance covered in kilometers
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Mean speed in km/h
    #[must_use]
    pub const fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    /// Calories burned in kcal
    #[must_use]
    pub const fn calories_kcal(&self) -> f64 {
        self.calories_kcal
    }
}
