// ABOUTME: Configuration module for report and logging settings
// ABOUTME: Environment-only configuration with CLI overrides applied by the binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! There are no configuration files: every setting comes from the environment
//! and can be overridden by command-line flags.

/// Environment-driven tracker configuration
pub mod environment;

pub use environment::TrackerConfig;
