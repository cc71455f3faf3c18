// ABOUTME: Core types and constants for the workout tracker
// ABOUTME: Foundation crate with error handling, workout models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Foundation crate providing shared types and constants for the workout
//! tracker. The calculation engine, reporter and CLI live in the root crate
//! and build on the types defined here.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `WorkoutError`
//! - **constants**: Unit conversions, workout codes, and environment variable names
//! - **models**: Workout types, computed records, and raw sensor packages

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`WorkoutType`, `WorkoutRecord`, `SensorPackage`)
pub mod models;
