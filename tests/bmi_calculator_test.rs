// ABOUTME: Integration tests for BMI calculation and end-to-end assessment
// ABOUTME: Covers reference scenarios, boundary inputs, rejection of invalid inputs, and display helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors
//! BMI calculation tests
//!
//! - Reference height/weight pairs and their categories
//! - Formula fidelity at the configured bounds
//! - Rejection of non-positive, non-finite, and out-of-range inputs
//! - One-decimal display and the realistic-BMI check

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use bmi_calculator::{
    config::BmiConfig,
    errors::{ErrorCode, Measurement, MeasurementError},
    intelligence::{assess, calculate_bmi, format_bmi, is_realistic_bmi, BmiCalculator},
    models::BmiCategory,
};
use common::{assert_close, who_engine};

mod common;

// ============================================================================
// REFERENCE SCENARIOS
// ============================================================================

#[test]
fn test_average_adult_is_normal_weight() {
    let engine = who_engine();
    let report = engine.assess(170.0, 70.0).unwrap();

    assert_close(report.bmi, 24.22, 0.01);
    assert_eq!(report.bmi_display, "24.2");
    assert_eq!(report.category.category, BmiCategory::Normal);
    assert_eq!(report.category.name, "Normal weight");
    assert_eq!(report.category.color, "#2ECC71");
    assert_eq!(report.category.emoji, "✅");
}

#[test]
fn test_tall_light_adult_is_underweight() {
    let report = who_engine().assess(180.0, 55.0).unwrap();
    assert_close(report.bmi, 16.98, 0.01);
    assert_eq!(report.category.category, BmiCategory::Underweight);
    assert_eq!(report.category.color, "#FFC300");
}

#[test]
fn test_overweight_adult() {
    let report = who_engine().assess(165.0, 75.0).unwrap();
    assert_close(report.bmi, 27.55, 0.01);
    assert_eq!(report.category.category, BmiCategory::Overweight);
    assert_eq!(report.category.emoji, "⚠️");
}

#[test]
fn test_obese_adult() {
    let report = who_engine().assess(160.0, 85.0).unwrap();
    assert_close(report.bmi, 33.20, 0.01);
    assert_eq!(report.category.category, BmiCategory::Obese);
    assert_eq!(report.category.color, "#C70039");
    assert_eq!(report.category.emoji, "🚨");
}

#[test]
fn test_minimum_inputs_give_exactly_ten() {
    let config = BmiConfig::default();
    let bmi = calculate_bmi(100.0, 10.0, &config).unwrap();
    assert_eq!(bmi, 10.0);

    let report = assess(100.0, 10.0, &config).unwrap();
    assert_eq!(report.category.category, BmiCategory::Underweight);
}

#[test]
fn test_maximum_inputs() {
    let bmi = calculate_bmi(300.0, 500.0, &BmiConfig::default()).unwrap();
    assert_close(bmi, 55.56, 0.01);
}

#[test]
fn test_fractional_inputs() {
    let bmi = calculate_bmi(175.5, 72.3, &BmiConfig::default()).unwrap();
    assert_close(bmi, 23.47, 0.01);
    assert_eq!(format_bmi(bmi), "23.5");
}

#[test]
fn test_result_matches_formula_without_rounding() {
    let config = BmiConfig::default();
    for (height, weight) in [(150.0, 45.5), (182.3, 91.7), (201.0, 130.0)] {
        let bmi = calculate_bmi(height, weight, &config).unwrap();
        let expected = weight / (height / 100.0_f64).powi(2);
        assert_eq!(bmi, expected);
        assert!(bmi.is_finite() && bmi > 0.0);
    }
}

// ============================================================================
// INPUT REJECTION
// ============================================================================

#[test]
fn test_zero_height_rejected_as_non_positive() {
    let err = calculate_bmi(0.0, 70.0, &BmiConfig::default()).unwrap_err();
    assert_eq!(
        err,
        MeasurementError::NonPositive {
            measurement: Measurement::Height
        }
    );
    assert!(err.to_string().contains("must be a positive value"));
}

#[test]
fn test_negative_weight_rejected_as_non_positive() {
    let err = calculate_bmi(170.0, -1.0, &BmiConfig::default()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidInput);
    assert_eq!(err.measurement(), Some(Measurement::Weight));
}

#[test]
fn test_out_of_range_inputs_rejected_by_calculator() {
    let config = BmiConfig::default();

    let low = calculate_bmi(99.9, 70.0, &config).unwrap_err();
    assert_eq!(low.code(), ErrorCode::ValueOutOfRange);
    assert!(low.to_string().contains("between 100 and 300 cm"));

    let high = calculate_bmi(170.0, 500.1, &config).unwrap_err();
    assert_eq!(high.code(), ErrorCode::ValueOutOfRange);
    assert!(high.to_string().contains("Maximum allowed: 500 kg"));
}

#[test]
fn test_non_finite_inputs_rejected() {
    let config = BmiConfig::default();
    for (height, weight) in [
        (f64::NAN, 70.0),
        (170.0, f64::NAN),
        (f64::INFINITY, 70.0),
        (170.0, f64::NEG_INFINITY),
    ] {
        let err = calculate_bmi(height, weight, &config).unwrap_err();
        assert!(matches!(err, MeasurementError::NonFinite { .. }));
    }
}

#[test]
fn test_assessment_error_carries_field_and_code() {
    let err = who_engine().assess(0.0, 70.0).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(err.context.field, Some(Measurement::Height));
    assert_eq!(err.user_message(), "Height must be a positive value.");
}

// ============================================================================
// DISPLAY HELPERS
// ============================================================================

#[test]
fn test_report_includes_tips_and_disclaimer() {
    let report = who_engine().assess(160.0, 85.0).unwrap();
    assert!(report.category.tips.contains("Consult with healthcare professionals"));
    assert!(report.disclaimer.contains("BMI is just one measure of health"));
}

#[test]
fn test_realistic_flag_follows_configured_maximum() {
    let calculator_config = BmiConfig::default();
    let calculator = BmiCalculator::new(&calculator_config);
    assert!(calculator.is_realistic(55.0));
    assert!(!calculator.is_realistic(100.5));

    let report = who_engine().assess(100.0, 500.0).unwrap();
    assert_eq!(report.bmi, 500.0);
    assert!(!report.realistic);
    assert_eq!(report.category.category, BmiCategory::Obese);
}

#[test]
fn test_is_realistic_bmi_bounds() {
    assert!(is_realistic_bmi(0.0, 100.0));
    assert!(is_realistic_bmi(24.2, 100.0));
    assert!(!is_realistic_bmi(-1.0, 100.0));
    assert!(!is_realistic_bmi(150.0, 100.0));
}

#[test]
fn test_report_serializes_to_json() {
    let report = who_engine().assess(170.0, 70.0).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["bmi_display"], "24.2");
    assert_eq!(json["category"]["category"], "normal");
    assert_eq!(json["category"]["name"], "Normal weight");
    assert_eq!(json["category"]["upper_threshold"], 25.0);
    assert_eq!(json["realistic"], true);
}
