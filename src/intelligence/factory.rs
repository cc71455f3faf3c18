// ABOUTME: Builds workout calculators from raw sensor packages
// ABOUTME: Resolves the workout code, checks arity, and validates each reading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::debug;
use workout_core::errors::WorkoutError;
use workout_core::models::{SensorPackage, WorkoutType};

use super::calculator::{Running, SessionInputs, SportsWalking, Swimming, WorkoutCalculator};

/// Read a sensor package into the matching calculator.
///
/// `data` must follow the layout of [`WorkoutType::parameter_names`]:
/// `RUN` takes `[actions, hours, weight]`, `WLK` appends `height_cm`, `SWM`
/// appends `pool_length_m` and `pool_count`.
///
/// # Errors
///
/// - `WorkoutError::UnknownCode` if `code` names no supported workout
/// - `WorkoutError::InvalidArgumentCount` if `data` has the wrong length
/// - `WorkoutError::InvalidParameter` if a count is not a non-negative integer
///   or a duration, weight, height, or pool dimension is not positive
pub fn read_package(code: &str, data: &[f64]) -> Result<WorkoutCalculator, WorkoutError> {
    let workout_type =
        WorkoutType::from_code(code).ok_or_else(|| WorkoutError::unknown_code(code))?;

    let expected = workout_type.parameter_count();
    if data.len() != expected {
        return Err(WorkoutError::invalid_argument_count(
            code,
            expected,
            data.len(),
        ));
    }

    debug!(
        workout.code = %code,
        workout.kind = %workout_type,
        "Reading sensor package"
    );

    let session = SessionInputs::new(
        workout_type,
        count_reading(workout_type, data, 0)?,
        data[1],
        data[2],
    )?;

    let calculator: WorkoutCalculator = match workout_type {
        WorkoutType::Running => Running::new(session).into(),
        WorkoutType::SportsWalking => SportsWalking::new(session, data[3])?.into(),
        WorkoutType::Swimming => Swimming::new(
            session,
            data[3],
            count_reading(workout_type, data, 4)?,
        )?
        .into(),
    };
    Ok(calculator)
}

/// Read a [`SensorPackage`] into the matching calculator.
///
/// # Errors
///
/// Same as [`read_package`].
pub fn read_sensor_package(package: &SensorPackage) -> Result<WorkoutCalculator, WorkoutError> {
    read_package(&package.code, &package.data)
}

/// Convert the counter reading (steps, strokes, lengths) at `index` to an integer
fn count_reading(
    workout_type: WorkoutType,
    data: &[f64],
    index: usize,
) -> Result<u32, WorkoutError> {
    let value = data[index];
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(WorkoutError::invalid_parameter(
            workout_type.code(),
            workout_type.parameter_names()[index],
            format!("must be a non-negative whole number, got {value}"),
        ));
    }
    Ok(value as u32)
}
