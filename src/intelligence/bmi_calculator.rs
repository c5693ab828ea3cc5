// ABOUTME: Body Mass Index calculation from height in centimeters and weight in kilograms
// ABOUTME: Enforces positive, in-range inputs itself and returns the unrounded value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors

//! BMI Calculator Module
//!
//! `BMI = weight_kg / height_m²` with `height_m = height_cm / 100`.
//!
//! # Scientific References
//!
//! - Keys, A., et al. (1972). Indices of relative weight and obesity.
//!   *Journal of Chronic Diseases*, 25(6), 329-343.
//!   <https://doi.org/10.1016/0021-9681(72)90027-6>
//!
//! - WHO (2000). Obesity: preventing and managing the global epidemic.
//!   WHO Technical Report Series 894.

use super::validators::validate_inputs;
use crate::config::BmiConfig;
use crate::logging::EngineLogger;
use bmi_core::constants::measurement_limits::CM_PER_METER;
use bmi_core::errors::MeasurementError;

/// Compute BMI from height (cm) and weight (kg)
///
/// Inputs are checked against `config` even when the caller validated them already.
/// The result is not rounded; use [`format_bmi`] for display.
///
/// # Errors
///
/// Returns a [`MeasurementError`] if either input is non-finite, not positive, or
/// outside its configured range
pub fn calculate_bmi(
    height_cm: f64,
    weight_kg: f64,
    config: &BmiConfig,
) -> Result<f64, MeasurementError> {
    validate_inputs(height_cm, weight_kg, config)?;

    let height_m = height_cm / CM_PER_METER;
    let bmi = weight_kg / height_m.powi(2);

    EngineLogger::log_calculation(height_cm, weight_kg, bmi);
    Ok(bmi)
}

/// Render a BMI with one decimal place
#[must_use]
pub fn format_bmi(bmi: f64) -> String {
    format!("{bmi:.1}")
}

/// Whether `bmi` lies in `[0, max]`
#[must_use]
pub fn is_realistic_bmi(bmi: f64, max: f64) -> bool {
    (0.0..=max).contains(&bmi)
}

/// Calculator bound to one configuration
#[derive(Debug, Clone, Copy)]
pub struct BmiCalculator<'a> {
    config: &'a BmiConfig,
}

impl<'a> BmiCalculator<'a> {
    /// Create a calculator over `config`
    #[must_use]
    pub const fn new(config: &'a BmiConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &'a BmiConfig {
        self.config
    }

    /// See [`calculate_bmi`]
    ///
    /// # Errors
    ///
    /// Returns a [`MeasurementError`] for invalid inputs
    pub fn calculate(&self, height_cm: f64, weight_kg: f64) -> Result<f64, MeasurementError> {
        calculate_bmi(height_cm, weight_kg, self.config)
    }

    /// [`is_realistic_bmi`] against the configured maximum
    #[must_use]
    pub fn is_realistic(&self, bmi: f64) -> bool {
        is_realistic_bmi(bmi, self.config.max_realistic_bmi)
    }
}
