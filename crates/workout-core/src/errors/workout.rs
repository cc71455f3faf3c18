// ABOUTME: Workout-specific error types raised while reading sensor packages
// ABOUTME: Provides structured errors that integrate with the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Error Types
//!
//! - `WorkoutError` - failures while turning a raw sensor package into a calculator
//! - Conversion to `AppError` for uniform reporting at the CLI boundary

use std::error::Error;
use std::fmt;

use serde_json::json;

use super::{AppError, ErrorCode};

/// Errors raised while reading a sensor package.
///
/// Only [`WorkoutError::UnknownCode`] is recoverable: the batch reports it and
/// moves on. The remaining variants mean the package itself is malformed.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutError {
    /// The workout code does not name a supported workout
    UnknownCode {
        /// Code as it appeared in the package
        code: String,
    },
    /// The parameter list does not match the workout's arity
    InvalidArgumentCount {
        /// Workout code
        code: String,
        /// Number of parameters the workout takes
        expected: usize,
        /// Number of parameters supplied
        actual: usize,
    },
    /// A parameter value violates its precondition
    InvalidParameter {
        /// Workout code
        code: String,
        /// Name of the offending parameter
        parameter: &'static str,
        /// Reason the value was rejected
        reason: String,
    },
}

impl WorkoutError {
    /// Create an "unknown code" error
    #[must_use]
    pub fn unknown_code(code: impl Into<String>) -> Self {
        Self::UnknownCode { code: code.into() }
    }

    /// Create an "invalid argument count" error
    #[must_use]
    pub fn invalid_argument_count(code: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::InvalidArgumentCount {
            code: code.into(),
            expected,
            actual,
        }
    }

    /// Create an "invalid parameter" error
    #[must_use]
    pub fn invalid_parameter(
        code: impl Into<String>,
        parameter: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            code: code.into(),
            parameter,
            reason: reason.into(),
        }
    }

    /// Workout code carried by this error
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::UnknownCode { code }
            | Self::InvalidArgumentCount { code, .. }
            | Self::InvalidParameter { code, .. } => code,
        }
    }

    /// Whether batch processing may continue past this error
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnknownCode { .. })
    }
}

impl fmt::Display for WorkoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCode { code } => {
                write!(f, "Unknown workout code '{code}'")
            }
            Self::InvalidArgumentCount {
                code,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Workout '{code}' takes {expected} parameters, got {actual}"
                )
            }
            Self::InvalidParameter {
                code,
                parameter,
                reason,
            } => {
                write!(
                    f,
                    "Invalid parameter '{parameter}' for workout '{code}': {reason}"
                )
            }
        }
    }
}

impl Error for WorkoutError {}

impl From<WorkoutError> for AppError {
    fn from(error: WorkoutError) -> Self {
        let (code, details) = match &error {
            WorkoutError::UnknownCode { code } => {
                (ErrorCode::ResourceNotFound, json!({ "workout_code": code }))
            }
            WorkoutError::InvalidArgumentCount {
                code,
                expected,
                actual,
            } => (
                ErrorCode::InvalidInput,
                json!({ "workout_code": code, "expected": expected, "actual": actual }),
            ),
            WorkoutError::InvalidParameter {
                code, parameter, ..
            } => (
                ErrorCode::ValueOutOfRange,
                json!({ "workout_code": code, "parameter": parameter }),
            ),
        };
        Self::new(code, error.to_string()).with_details(details)
    }
}
