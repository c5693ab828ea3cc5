// ABOUTME: BMI engine: validation, calculation, classification, gauge data, and assessment
// ABOUTME: Every operation takes its configuration explicitly; nothing reads global state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors

//! # BMI Engine
//!
//! Data flow: raw `(height_cm, weight_kg)` → [`validators`] → [`bmi_calculator`]
//! → [`classification`] → presentation ([`gauge`] and [`assessment`]).

/// End-to-end assessment report and configured engine
pub mod assessment;
/// BMI formula and display helpers
pub mod bmi_calculator;
/// LRU memoization of assessments
pub mod cache;
/// Ordered category table and classifier
pub mod classification;
/// Gauge band geometry
pub mod gauge;
/// Height and weight validation
pub mod validators;

pub use assessment::{assess, BmiAssessment, BmiEngine};
pub use bmi_calculator::{calculate_bmi, format_bmi, is_realistic_bmi, BmiCalculator};
pub use cache::{AssessmentCache, CacheStats};
pub use classification::{CategoryRecord, CategoryTable};
pub use gauge::{GaugeBand, GaugeSpec};
pub use validators::{validate_height, validate_inputs, validate_measurement, validate_weight};
