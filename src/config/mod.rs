// ABOUTME: Configuration module for the BMI engine
// ABOUTME: Explicit, immutable configuration loaded from the environment and validated once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors

//! Configuration for the BMI engine.
//!
//! Configuration is environment-only. A [`BmiConfig`] is built once by the front end
//! (`BmiConfig::load()`), then passed by reference into the validator, calculator,
//! and classifier. Nothing reads configuration from ambient global state.

/// Measurement bounds, thresholds, and display metadata
pub mod bmi;
/// Configuration error types
pub mod error;

pub use bmi::{
    BmiConfig, CategoryDisplayConfig, CategoryStyle, MeasurementRange, ThresholdConfig,
    ThresholdProfile,
};
pub use error::ConfigError;
