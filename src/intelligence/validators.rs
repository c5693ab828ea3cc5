// ABOUTME: Height and weight validation against configured physical ranges
// ABOUTME: Short-circuits on the first failure with a message naming the violated bound
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors

//! Measurement validation
//!
//! Rules are checked in order and the first failure wins:
//!
//! 1. value is not finite
//! 2. value is zero or negative
//! 3. value is below the configured minimum
//! 4. value is above the configured maximum
//!
//! [`validate_inputs`] checks height before weight.

use crate::config::{BmiConfig, MeasurementRange};
use crate::logging::EngineLogger;
use bmi_core::errors::{Measurement, MeasurementError};

/// Check one measurement against `range`
///
/// # Errors
///
/// Returns the first [`MeasurementError`] the value triggers
pub fn validate_measurement(
    measurement: Measurement,
    value: f64,
    range: &MeasurementRange,
) -> Result<(), MeasurementError> {
    let result = check(measurement, value, range);
    if let Err(ref error) = result {
        EngineLogger::log_rejected_input(error);
    }
    result
}

fn check(
    measurement: Measurement,
    value: f64,
    range: &MeasurementRange,
) -> Result<(), MeasurementError> {
    if !value.is_finite() {
        return Err(MeasurementError::NonFinite { measurement });
    }
    if value <= 0.0 {
        return Err(MeasurementError::NonPositive { measurement });
    }
    if value < range.min {
        return Err(MeasurementError::TooLow {
            measurement,
            value,
            min: range.min,
            max: range.max,
        });
    }
    if value > range.max {
        return Err(MeasurementError::TooHigh {
            measurement,
            value,
            max: range.max,
        });
    }
    Ok(())
}

/// Validate a height in centimeters
///
/// # Errors
///
/// Returns a [`MeasurementError`] for [`Measurement::Height`] on failure
pub fn validate_height(height_cm: f64, config: &BmiConfig) -> Result<(), MeasurementError> {
    validate_measurement(Measurement::Height, height_cm, &config.height)
}

/// Validate a weight in kilograms
///
/// # Errors
///
/// Returns a [`MeasurementError`] for [`Measurement::Weight`] on failure
pub fn validate_weight(weight_kg: f64, config: &BmiConfig) -> Result<(), MeasurementError> {
    validate_measurement(Measurement::Weight, weight_kg, &config.weight)
}

/// Validate height then weight
///
/// # Errors
///
/// Returns the height error if height is invalid, otherwise the weight error
pub fn validate_inputs(
    height_cm: f64,
    weight_kg: f64,
    config: &BmiConfig,
) -> Result<(), MeasurementError> {
    validate_height(height_cm, config)?;
    validate_weight(weight_kg, config)
}
