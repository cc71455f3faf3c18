// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for units, workout codes, and environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Unit conversion and measurement constants
pub mod units;

/// Short codes emitted by the tracker for each workout kind
pub mod workout_codes {
    /// Running
    pub const RUNNING: &str = "RUN";
    /// Sports walking
    pub const SPORTS_WALKING: &str = "WLK";
    /// Swimming
    pub const SWIMMING: &str = "SWM";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Report locale (`ru` or `en`)
    pub const REPORT_LOCALE: &str = "WORKOUT_REPORT_LOCALE";
    /// Output format (`text` or `json`)
    pub const OUTPUT_FORMAT: &str = "WORKOUT_OUTPUT_FORMAT";
    /// Log output format (`pretty`, `json`, `compact`)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Log filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Include file and line in log output when set
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
}

/// Service identification used in structured logs
pub mod service_names {
    /// Binary/service name
    pub const WORKOUT_TRACKER: &str = "workout-tracker";
}
