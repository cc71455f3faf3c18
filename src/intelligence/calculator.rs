// ABOUTME: Distance, speed, and calorie calculations for running, walking, and swimming
// ABOUTME: Closed enum of workout calculators dispatched by exhaustive match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout calculators.
//!
//! Each variant carries its own validated parameters. Distance is stride-based
//! for every workout (`action_count * stride / 1000`); mean speed is
//! `distance / duration` except for swimming, where it is derived from the pool
//! length and number of lengths swum.
//!
//! Values are never cached: every accessor recomputes from the immutable inputs,
//! so repeated calls return identical results.

use workout_core::constants::units::{METERS_PER_KM, MINUTES_PER_HOUR};
use workout_core::errors::WorkoutError;
use workout_core::models::{WorkoutRecord, WorkoutType};

use super::workout_constants::{running, stride, swimming, walking};

/// Inputs every workout records
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionInputs {
    action_count: u32,
    duration_hours: f64,
    weight_kg: f64,
}

impl SessionInputs {
    /// Validate shared inputs for `workout_type`
    ///
    /// # Errors
    ///
    /// Returns `WorkoutError::InvalidParameter` if the duration or weight is
    /// not a finite, strictly positive number.
    pub fn new(
        workout_type: WorkoutType,
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
    ) -> Result<Self, WorkoutError> {
        ensure_positive(workout_type, "duration_hours", duration_hours)?;
        ensure_positive(workout_type, "weight_kg", weight_kg)?;
        Ok(Self {
            action_count,
            duration_hours,
            weight_kg,
        })
    }

    /// Steps or strokes counted by the tracker
    #[must_use]
    pub const fn action_count(&self) -> u32 {
        self.action_count
    }

    /// Session length in hours
    #[must_use]
    pub const fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    /// Athlete weight in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn duration_minutes(&self) -> f64 {
        self.duration_hours * MINUTES_PER_HOUR
    }
}

/// Running session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    session: SessionInputs,
}

impl Running {
    /// Create a running session
    #[must_use]
    pub const fn new(session: SessionInputs) -> Self {
        Self { session }
    }
}

/// Sports walking session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    session: SessionInputs,
    height_cm: f64,
}

impl SportsWalking {
    /// Create a walking session
    ///
    /// # Errors
    ///
    /// Returns `WorkoutError::InvalidParameter` if `height_cm` is not a finite,
    /// strictly positive number.
    pub fn new(session: SessionInputs, height_cm: f64) -> Result<Self, WorkoutError> {
        ensure_positive(WorkoutType::SportsWalking, "height_cm", height_cm)?;
        Ok(Self { session, height_cm })
    }

    /// Athlete height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

/// Pool swimming session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    session: SessionInputs,
    pool_length_m: f64,
    pool_count: u32,
}

impl Swimming {
    /// Create a swimming session
    ///
    /// # Errors
    ///
    /// Returns `WorkoutError::InvalidParameter` if the pool length is not a
    /// finite, strictly positive number or if no pool lengths were swum.
    pub fn new(
        session: SessionInputs,
        pool_length_m: f64,
        pool_count: u32,
    ) -> Result<Self, WorkoutError> {
        ensure_positive(WorkoutType::Swimming, "pool_length_m", pool_length_m)?;
        if pool_count == 0 {
            return Err(WorkoutError::invalid_parameter(
                WorkoutType::Swimming.code(),
                "pool_count",
                "must be at least 1",
            ));
        }
        Ok(Self {
            session,
            pool_length_m,
            pool_count,
        })
    }

    /// Pool length in meters
    #[must_use]
    pub const fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    /// Number of pool lengths swum
    #[must_use]
    pub const fn pool_count(&self) -> u32 {
        self.pool_count
    }
}

/// A workout ready to be summarized
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutCalculator {
    /// Running
    Running(Running),
    /// Sports walking
    SportsWalking(SportsWalking),
    /// Pool swimming
    Swimming(Swimming),
}

impl WorkoutCalculator {
    /// Workout type of this calculator
    #[must_use]
    pub const fn workout_type(&self) -> WorkoutType {
        match self {
            Self::Running(_) => WorkoutType::Running,
            Self::SportsWalking(_) => WorkoutType::SportsWalking,
            Self::Swimming(_) => WorkoutType::Swimming,
        }
    }

    /// Shared session inputs
    #[must_use]
    pub const fn session(&self) -> &SessionInputs {
        match self {
            Self::Running(Running { session })
            | Self::SportsWalking(SportsWalking { session, .. })
            | Self::Swimming(Swimming { session, .. }) => session,
        }
    }

    /// Distance covered by one counted action, in meters
    #[must_use]
    pub const fn step_length_m(&self) -> f64 {
        match self {
            Self::Running(_) | Self::SportsWalking(_) => stride::STEP_LENGTH_M,
            Self::Swimming(_) => stride::STROKE_LENGTH_M,
        }
    }

    /// Distance in kilometers: `action_count * step_length / 1000`
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        f64::from(self.session().action_count) * self.step_length_m() / METERS_PER_KM
    }

    /// Mean speed in km/h
    #[must_use]
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Running(_) | Self::SportsWalking(_) => {
                self.distance_km() / self.session().duration_hours
            }
            Self::Swimming(swim) => {
                swim.pool_length_m * f64::from(swim.pool_count)
                    / METERS_PER_KM
                    / swim.session.duration_hours
            }
        }
    }

    /// Calories burned in kcal.
    ///
    /// Running can yield a negative value for very slow sessions; the formula
    /// is reported as computed.
    #[must_use]
    pub fn spent_calories_kcal(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        match self {
            Self::Running(Running { session }) => {
                (running::CALORIES_SPEED_MULTIPLIER * speed - running::CALORIES_SPEED_SHIFT)
                    * session.weight_kg
                    / METERS_PER_KM
                    * session.duration_minutes()
            }
            Self::SportsWalking(walk) => {
                let weight = walk.session.weight_kg;
                (walking::CALORIES_WEIGHT_MULTIPLIER * weight
                    + floor_div(speed.powi(2), walk.height_cm)
                        * walking::CALORIES_SPEED_HEIGHT_MULTIPLIER
                        * weight)
                    * walk.session.duration_minutes()
            }
            Self::Swimming(swim) => {
                (speed + swimming::CALORIES_SPEED_SHIFT)
                    * swimming::CALORIES_WEIGHT_MULTIPLIER
                    * swim.session.weight_kg
            }
        }
    }

    /// Compute the summary record for this workout
    #[must_use]
    pub fn training_info(&self) -> WorkoutRecord {
        WorkoutRecord::new(
            self.workout_type(),
            self.session().duration_hours,
            self.distance_km(),
            self.mean_speed_kmh(),
            self.spent_calories_kcal(),
        )
    }
}

impl From<Running> for WorkoutCalculator {
    fn from(workout: Running) -> Self {
        Self::Running(workout)
    }
}

impl From<SportsWalking> for WorkoutCalculator {
    fn from(workout: SportsWalking) -> Self {
        Self::SportsWalking(workout)
    }
}

impl From<Swimming> for WorkoutCalculator {
    fn from(workout: Swimming) -> Self {
        Self::Swimming(workout)
    }
}

/// Floored float division, rounding the way the reference tracker does.
///
/// Computing `floor(a / b)` directly differs when `a / b` rounds up to an
/// integer; going through the remainder keeps the quotient exact. Both
/// operands are positive here.
fn floor_div(numerator: f64, denominator: f64) -> f64 {
    let remainder = numerator % denominator;
    let quotient = (numerator - remainder) / denominator;
    let floored = quotient.floor();
    if quotient - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

fn ensure_positive(
    workout_type: WorkoutType,
    parameter: &'static str,
    value: f64,
) -> Result<(), WorkoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WorkoutError::invalid_parameter(
            workout_type.code(),
            parameter,
            format!("must be a positive number, got {value}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn session(workout_type: WorkoutType, actions: u32, hours: f64, weight: f64) -> SessionInputs {
        SessionInputs::new(workout_type, actions, hours, weight).unwrap()
    }

    #[test]
    fn test_running_reference_session() {
        let run = WorkoutCalculator::from(Running::new(session(
            WorkoutType::Running,
            1206,
            12.0,
            6.0,
        )));

        assert!((run.distance_km() - 0.7839).abs() < EPSILON);
        assert!((run.mean_speed_kmh() - 0.065_325).abs() < EPSILON);
        assert!((run.spent_calories_kcal() - -81.320_328).abs() < 1e-6);
    }

    #[test]
    fn test_running_distance_is_stride_based() {
        let run = WorkoutCalculator::from(Running::new(session(
            WorkoutType::Running,
            15000,
            1.0,
            75.0,
        )));
        assert_eq!(run.distance_km(), 15000.0 * 0.65 / 1000.0);
        assert_eq!(run.mean_speed_kmh(), run.distance_km() / 1.0);
        assert!((run.spent_calories_kcal() - 699.75).abs() < EPSILON);
    }

    #[test]
    fn test_walking_reference_session() {
        let walk = WorkoutCalculator::from(
            SportsWalking::new(session(WorkoutType::SportsWalking, 9000, 1.0, 75.0), 180.0)
                .unwrap(),
        );

        assert!((walk.distance_km() - 5.85).abs() < EPSILON);
        assert!((walk.mean_speed_kmh() - 5.85).abs() < EPSILON);
        assert!((walk.spent_calories_kcal() - 157.5).abs() < EPSILON);
    }

    #[test]
    fn test_walking_speed_height_term_is_floored() {
        // 5.85^2 / 1.5 = 22.815, floored to 22
        let walk = WorkoutCalculator::from(
            SportsWalking::new(session(WorkoutType::SportsWalking, 9000, 1.0, 75.0), 1.5)
                .unwrap(),
        );
        assert!((walk.spent_calories_kcal() - 3028.5).abs() < 1e-6);
    }

    #[test]
    fn test_swimming_reference_session() {
        let swim = WorkoutCalculator::from(
            Swimming::new(session(WorkoutType::Swimming, 720, 1.0, 80.0), 25.0, 40).unwrap(),
        );

        assert!((swim.distance_km() - 0.9936).abs() < EPSILON);
        assert_eq!(swim.mean_speed_kmh(), 25.0 * 40.0 / 1000.0 / 1.0);
        assert!((swim.spent_calories_kcal() - 336.0).abs() < EPSILON);
    }

    #[test]
    fn test_swimming_speed_ignores_strokes() {
        let few = Swimming::new(session(WorkoutType::Swimming, 10, 2.0, 80.0), 50.0, 20).unwrap();
        let many = Swimming::new(session(WorkoutType::Swimming, 5000, 2.0, 80.0), 50.0, 20).unwrap();
        assert_eq!(
            WorkoutCalculator::from(few).mean_speed_kmh(),
            WorkoutCalculator::from(many).mean_speed_kmh()
        );
    }

    #[test]
    fn test_calories_are_idempotent() {
        let walk = WorkoutCalculator::from(
            SportsWalking::new(session(WorkoutType::SportsWalking, 12000, 1.5, 68.0), 172.0)
                .unwrap(),
        );
        assert_eq!(walk.spent_calories_kcal(), walk.spent_calories_kcal());
        assert_eq!(walk.training_info(), walk.training_info());
    }

    #[test]
    fn test_session_accessors() {
        let inputs = session(WorkoutType::Running, 1206, 12.0, 6.0);
        assert_eq!(inputs.action_count(), 1206);
        assert_eq!(inputs.duration_hours(), 12.0);
        assert_eq!(inputs.weight_kg(), 6.0);
    }

    #[test]
    fn test_training_info_collects_computed_values() {
        let swim = WorkoutCalculator::from(
            Swimming::new(session(WorkoutType::Swimming, 720, 1.0, 80.0), 25.0, 40).unwrap(),
        );
        let record = swim.training_info();

        assert_eq!(record.workout_type(), WorkoutType::Swimming);
        assert_eq!(record.duration_hours(), 1.0);
        assert_eq!(record.distance_km(), swim.distance_km());
        assert_eq!(record.speed_kmh(), swim.mean_speed_kmh());
        assert_eq!(record.calories_kcal(), swim.spent_calories_kcal());
    }

    #[test]
    fn test_rejects_non_positive_inputs() {
        let err = SessionInputs::new(WorkoutType::Running, 100, 0.0, 70.0).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidParameter { parameter: "duration_hours", .. }
        ));

        let err = SessionInputs::new(WorkoutType::Running, 100, 1.0, -3.0).unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidParameter { parameter: "weight_kg", .. }));

        let err = SessionInputs::new(WorkoutType::Running, 100, f64::NAN, 70.0).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidParameter { parameter: "duration_hours", .. }
        ));

        let base = session(WorkoutType::Swimming, 100, 1.0, 70.0);
        assert!(Swimming::new(base, 25.0, 0).is_err());
        assert!(Swimming::new(base, 0.0, 10).is_err());
        assert!(SportsWalking::new(base, 0.0).is_err());
    }

    #[test]
    fn test_floor_div_matches_plain_floor_on_ordinary_values() {
        assert_eq!(floor_div(34.2225, 1.5), 22.0);
        assert_eq!(floor_div(0.190_125, 180.0), 0.0);
        assert_eq!(floor_div(9.0, 3.0), 3.0);
    }

    #[test]
    fn test_floor_div_when_plain_quotient_rounds_up() {
        // 1.0 / 0.1 rounds to exactly 10.0, but 0.1 is stored slightly above a tenth
        assert_eq!((1.0_f64 / 0.1).floor(), 10.0);
        assert_eq!(floor_div(1.0, 0.1), 9.0);
    }

    #[test]
    fn test_walking_calories_use_floored_speed_ratio() {
        let walk = SportsWalking::new(session(WorkoutType::SportsWalking, 1000, 0.65, 70.0), 0.1)
            .unwrap();
        let workout = WorkoutCalculator::from(walk);

        assert_eq!(workout.mean_speed_kmh(), 1.0);
        assert!((workout.spent_calories_kcal() - 808.08).abs() < 1e-9);
    }
}
