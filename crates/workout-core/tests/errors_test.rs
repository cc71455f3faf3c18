// ABOUTME: Tests for workout-core error conversion and structured responses
// ABOUTME: Exercises WorkoutError to AppError to ErrorResponse through the public API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use workout_core::errors::{AppError, ErrorCode, ErrorResponse, WorkoutError};

#[test]
fn test_argument_count_error_response() {
    let error: AppError = WorkoutError::invalid_argument_count("RUN", 3, 5).into();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(error.message, "Workout 'RUN' takes 3 parameters, got 5");

    let json = serde_json::to_value(ErrorResponse::from(error)).unwrap();
    assert_eq!(json["error"]["code"], "INVALID_INPUT");
    assert_eq!(json["error"]["details"]["expected"], 3);
    assert_eq!(json["error"]["details"]["actual"], 5);
}

#[test]
fn test_serde_error_converts_to_serialization_code() {
    let parse_error = serde_json::from_str::<Vec<f64>>("not json").unwrap_err();
    let error = AppError::from(parse_error);
    assert_eq!(error.code, ErrorCode::SerializationError);
    assert!(error.source.is_some());
}
