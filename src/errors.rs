// ABOUTME: Error types re-exported from workout-core
// ABOUTME: Keeps `workout_tracker::errors` as the single import path for callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use workout_core::errors::*;
