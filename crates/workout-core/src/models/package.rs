// ABOUTME: Raw sensor package: a workout code plus its flat parameter list
// ABOUTME: Deserializable from the JSON batch files accepted by the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One entry read from the tracker: `("SWM", [720, 1, 80, 25, 40])`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Workout code (`RUN`, `WLK`, `SWM`)
    pub code: String,
    /// Ordered numeric readings, layout depends on the code
    pub data: Vec<f64>,
}

impl SensorPackage {
    /// Create a package
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            data: data.into(),
        }
    }

    /// Sample batch shipped with the tracker firmware
    #[must_use]
    pub fn sample_batch() -> Vec<Self> {
        vec![
            Self::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
            Self::new("RUN", [1206.0, 12.0, 6.0]),
            Self::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
        ]
    }
}
