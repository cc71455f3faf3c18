// ABOUTME: Workout type enumeration for tracker sessions
// ABOUTME: Maps tracker codes to workout kinds with report labels and parameter layouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::Serialize;

use crate::constants::workout_codes;

/// Workout kinds the tracker can report.
///
/// Serialized with the same label used in text reports.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "PascalCase")]
pub enum WorkoutType {
    /// Running, stride-based distance
    Running,
    /// Sports walking, stride-based distance with height-dependent calories
    SportsWalking,
    /// Pool swimming, pool-based speed
    Swimming,
}

impl WorkoutType {
    /// All supported workout types
    pub const ALL: [Self; 3] = [Self::Running, Self::SportsWalking, Self::Swimming];

    /// Resolve a tracker code such as `"RUN"`. Codes are case-sensitive.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            workout_codes::RUNNING => Some(Self::Running),
            workout_codes::SPORTS_WALKING => Some(Self::SportsWalking),
            workout_codes::SWIMMING => Some(Self::Swimming),
            _ => None,
        }
    }

    /// Tracker code for this workout type
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Running => workout_codes::RUNNING,
            Self::SportsWalking => workout_codes::SPORTS_WALKING,
            Self::Swimming => workout_codes::SWIMMING,
        }
    }

    /// Label printed in reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Ordered parameter names expected in a sensor package for this workout
    #[must_use]
    pub const fn parameter_names(self) -> &'static [&'static str] {
        match self {
            Self::Running => &["action_count", "duration_hours", "weight_kg"],
            Self::SportsWalking => &["action_count", "duration_hours", "weight_kg", "height_cm"],
            Self::Swimming => &[
                "action_count",
                "duration_hours",
                "weight_kg",
                "pool_length_m",
                "pool_count",
            ],
        }
    }

    /// Number of parameters a sensor package must carry for this workout
    #[must_use]
    pub const fn parameter_count(self) -> usize {
        self.parameter_names().len()
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
