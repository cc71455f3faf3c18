// ABOUTME: Tests for workout models: type codes, records, and sensor packages
// ABOUTME: Checks serialization shape consumed by JSON report output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use workout_core::models::{SensorPackage, WorkoutRecord, WorkoutType};

#[test]
fn test_record_serialization_shape() {
    let record = WorkoutRecord::new(WorkoutType::Swimming, 1.0, 0.9936, 1.0, 336.0);
    let json = serde_json::to_value(record).unwrap();

    assert_eq!(json["workout_type"], "Swimming");
    assert_eq!(json["duration_hours"], 1.0);
    assert_eq!(json["distance_km"], 0.9936);
    assert_eq!(json["speed_kmh"], 1.0);
    assert_eq!(json["calories_kcal"], 336.0);
}

#[test]
fn test_sample_batch_uses_known_codes_with_matching_arity() {
    for package in SensorPackage::sample_batch() {
        let workout_type = WorkoutType::from_code(&package.code).unwrap();
        assert_eq!(package.data.len(), workout_type.parameter_count());
    }
}

#[test]
fn test_display_uses_report_label() {
    assert_eq!(WorkoutType::SportsWalking.to_string(), "SportsWalking");
    assert_eq!(WorkoutType::Running.code(), "RUN");
}
