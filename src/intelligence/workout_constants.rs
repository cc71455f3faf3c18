// ABOUTME: Formula coefficients for the stride, pool, and calorie calculations
// ABOUTME: Grouped per workout type so each formula reads its own constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Coefficients used by the workout calculators.
//!
//! Values are calibrated against the tracker's reference outputs and must be
//! reproduced exactly; report golden tests depend on them.

/// Stride lengths, in meters per counted action
pub mod stride {
    /// Running and walking step length
    pub const STEP_LENGTH_M: f64 = 0.65;

    /// Swimming stroke length
    pub const STROKE_LENGTH_M: f64 = 1.38;
}

/// Running calorie formula: `(C1 * speed - C2) * weight / 1000 * minutes`
pub mod running {
    /// Speed multiplier
    pub const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;

    /// Speed offset
    pub const CALORIES_SPEED_SHIFT: f64 = 20.0;
}

/// Sports walking calorie formula:
/// `(C1 * weight + floor(speed^2 / height) * C2 * weight) * minutes`
pub mod walking {
    /// Weight multiplier
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;

    /// Multiplier for the floored speed-height term
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming calorie formula: `(speed + C1) * C2 * weight`
pub mod swimming {
    /// Speed offset
    pub const CALORIES_SPEED_SHIFT: f64 = 1.1;

    /// Weight multiplier
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;
}
