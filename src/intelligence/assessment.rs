// ABOUTME: End-to-end BMI assessment: validate, calculate, classify, and build a serializable report
// ABOUTME: BmiEngine owns the configuration, category table, and gauge derived from it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors

//! BMI assessment
//!
//! [`BmiEngine`] is built once from a validated [`BmiConfig`] and then answers
//! any number of [`BmiEngine::assess`] calls.

use super::bmi_calculator::{calculate_bmi, format_bmi, is_realistic_bmi};
use super::classification::{CategoryRecord, CategoryTable};
use super::gauge::GaugeSpec;
use super::validators::validate_inputs;
use crate::config::BmiConfig;
use bmi_core::constants::display::MEDICAL_DISCLAIMER;
use bmi_core::errors::{AppError, AppResult, MeasurementError};
use serde::Serialize;
use tracing::error;

/// Result of one assessment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiAssessment {
    /// Height in centimeters as supplied
    pub height_cm: f64,
    /// Weight in kilograms as supplied
    pub weight_kg: f64,
    /// Unrounded BMI
    pub bmi: f64,
    /// BMI with one decimal place
    pub bmi_display: String,
    /// Matched category with display metadata and tips
    pub category: CategoryRecord,
    /// Whether the BMI is within the realistic range
    pub realistic: bool,
    /// Gauge needle position
    pub gauge_position: f64,
    /// Medical disclaimer to show alongside the result
    pub disclaimer: &'static str,
}

/// Configured engine
#[derive(Debug, Clone)]
pub struct BmiEngine {
    config: BmiConfig,
    table: CategoryTable,
    gauge: GaugeSpec,
}

impl BmiEngine {
    /// Build an engine from `config`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` fails validation
    pub fn new(config: BmiConfig) -> AppResult<Self> {
        config.validate()?;
        let table = CategoryTable::from_config(&config);
        let gauge = GaugeSpec::from_table(&table, config.gauge_max);
        Ok(Self {
            config,
            table,
            gauge,
        })
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &BmiConfig {
        &self.config
    }

    /// Category table
    #[must_use]
    pub const fn table(&self) -> &CategoryTable {
        &self.table
    }

    /// Gauge geometry
    #[must_use]
    pub const fn gauge(&self) -> &GaugeSpec {
        &self.gauge
    }

    /// Validate height then weight
    ///
    /// # Errors
    ///
    /// Returns the first failing [`MeasurementError`]
    pub fn validate(&self, height_cm: f64, weight_kg: f64) -> Result<(), MeasurementError> {
        validate_inputs(height_cm, weight_kg, &self.config)
    }

    /// Compute BMI
    ///
    /// # Errors
    ///
    /// Returns a [`MeasurementError`] for invalid inputs
    pub fn calculate(&self, height_cm: f64, weight_kg: f64) -> Result<f64, MeasurementError> {
        calculate_bmi(height_cm, weight_kg, &self.config)
    }

    /// Classify a BMI value
    ///
    /// # Errors
    ///
    /// Returns a [`MeasurementError`] for negative or NaN input
    pub fn classify(&self, bmi: f64) -> Result<&CategoryRecord, MeasurementError> {
        self.table.classify(bmi)
    }

    /// Validate, calculate, classify, and assemble the report
    ///
    /// # Errors
    ///
    /// Returns an input error for invalid measurements and an internal error if the
    /// formula yields a non-finite value
    pub fn assess(&self, height_cm: f64, weight_kg: f64) -> AppResult<BmiAssessment> {
        self.validate(height_cm, weight_kg)?;
        let bmi = self.calculate(height_cm, weight_kg)?;

        if !bmi.is_finite() {
            error!(height_cm, weight_kg, bmi, "BMI formula produced a non-finite value");
            return Err(AppError::internal(format!(
                "BMI calculation produced a non-finite value for height {height_cm} cm and weight {weight_kg} kg"
            )));
        }

        let category = self.classify(bmi)?.clone();

        Ok(BmiAssessment {
            height_cm,
            weight_kg,
            bmi,
            bmi_display: format_bmi(bmi),
            category,
            realistic: is_realistic_bmi(bmi, self.config.max_realistic_bmi),
            gauge_position: self.gauge.needle(bmi),
            disclaimer: MEDICAL_DISCLAIMER,
        })
    }
}

/// One-shot assessment with a throwaway engine
///
/// # Errors
///
/// Returns the errors of [`BmiEngine::new`] and [`BmiEngine::assess`]
pub fn assess(height_cm: f64, weight_kg: f64, config: &BmiConfig) -> AppResult<BmiAssessment> {
    BmiEngine::new(config.clone())?.assess(height_cm, weight_kg)
}
