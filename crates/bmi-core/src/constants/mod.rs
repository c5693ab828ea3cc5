// ABOUTME: Application constants for the BMI engine organized by domain
// ABOUTME: Measurement limits, WHO thresholds, gauge sizing, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors

//! Constants shared by the engine, configuration defaults, and front ends.
//!
//! Thresholds follow the WHO adult BMI classification:
//! World Health Organization (2000). *Obesity: preventing and managing the global
//! epidemic*. WHO Technical Report Series 894.

/// Category display metadata (names, colors, emoji, descriptions, tips)
pub mod display;

/// Input validation ranges and UI defaults
pub mod measurement_limits {
    /// Minimum accepted height (cm)
    pub const HEIGHT_MIN_CM: f64 = 100.0;
    /// Maximum accepted height (cm)
    pub const HEIGHT_MAX_CM: f64 = 300.0;
    /// Height pre-filled by front ends (cm)
    pub const HEIGHT_DEFAULT_CM: f64 = 170.0;

    /// Minimum accepted weight (kg)
    pub const WEIGHT_MIN_KG: f64 = 10.0;
    /// Maximum accepted weight (kg)
    pub const WEIGHT_MAX_KG: f64 = 500.0;
    /// Stricter weight maximum for general-population deployments (kg)
    pub const WEIGHT_MAX_KG_GENERAL_POPULATION: f64 = 200.0;
    /// Weight pre-filled by front ends (kg)
    pub const WEIGHT_DEFAULT_KG: f64 = 70.0;

    /// Upper end of the "realistic BMI" display convention
    pub const BMI_MAX_REALISTIC: f64 = 100.0;

    /// Centimeters per meter
    pub const CM_PER_METER: f64 = 100.0;
}

/// Exclusive upper bounds of the first three categories
pub mod bmi_thresholds {
    /// WHO canonical cut-offs
    pub mod who {
        /// Underweight below this value
        pub const UNDERWEIGHT_UPPER: f64 = 18.5;
        /// Normal weight below this value
        pub const NORMAL_UPPER: f64 = 25.0;
        /// Overweight below this value
        pub const OVERWEIGHT_UPPER: f64 = 30.0;
    }

    /// Cut-offs used by earlier releases. Values in `[24.9, 25.0)` and
    /// `[29.9, 30.0)` land one category higher than under [`who`](super::who).
    pub mod legacy {
        /// Underweight below this value
        pub const UNDERWEIGHT_UPPER: f64 = 18.5;
        /// Normal weight below this value
        pub const NORMAL_UPPER: f64 = 24.9;
        /// Overweight below this value
        pub const OVERWEIGHT_UPPER: f64 = 29.9;
    }
}

/// Gauge sizing for front ends
pub mod gauge {
    /// Right end of the gauge scale
    pub const GAUGE_MAX_BMI: f64 = 40.0;
}

/// Memoization cache sizing
pub mod cache {
    /// Default number of assessments kept
    pub const DEFAULT_CAPACITY: usize = 128;
}

/// Service identifiers for structured logging
pub mod service_names {
    /// Name reported in log records
    pub const BMI_CALCULATOR: &str = "bmi-calculator";
}
