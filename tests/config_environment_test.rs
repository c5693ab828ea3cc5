// ABOUTME: Tests for loading BMI engine and logging configuration from environment variables
// ABOUTME: Serialized because every test mutates process-wide environment state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use bmi_calculator::{
    config::{BmiConfig, ConfigError, ThresholdConfig, ThresholdProfile},
    errors::{AppError, ErrorCode},
    intelligence::BmiEngine,
    logging::{LogFormat, LoggingConfig},
    models::BmiCategory,
};
use common::clear_bmi_env;
use serial_test::serial;
use std::env;

mod common;

// ============================================================================
// BMI CONFIGURATION
// ============================================================================

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_bmi_env();
    let config = BmiConfig::load().unwrap();
    assert_eq!(config, BmiConfig::default());
    assert_eq!(config.profile, ThresholdProfile::Who);
    assert_eq!(config.height.default, 170.0);
    assert_eq!(config.weight.default, 70.0);
}

#[test]
#[serial]
fn test_environment_overrides_ranges() {
    clear_bmi_env();
    env::set_var("BMI_WEIGHT_MAX_KG", "200");
    env::set_var("BMI_HEIGHT_MIN_CM", " 120.5 ");
    env::set_var("BMI_CACHE_CAPACITY", "16");

    let config = BmiConfig::load().unwrap();
    assert_eq!(config.weight.max, 200.0);
    assert_eq!(config.height.min, 120.5);
    assert_eq!(config.cache_capacity, 16);

    let engine = BmiEngine::new(config).unwrap();
    let err = engine.assess(170.0, 250.0).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert!(err.message.contains("Maximum allowed: 200 kg"));

    clear_bmi_env();
}

#[test]
#[serial]
fn test_legacy_profile_from_environment() {
    clear_bmi_env();
    env::set_var("BMI_THRESHOLD_PROFILE", "legacy");

    let config = BmiConfig::load().unwrap();
    assert_eq!(config.profile, ThresholdProfile::Legacy);
    assert_eq!(config.thresholds, ThresholdConfig::legacy());

    let engine = BmiEngine::new(config).unwrap();
    assert_eq!(
        engine.classify(24.9).unwrap().category,
        BmiCategory::Overweight
    );
    assert_eq!(engine.classify(29.9).unwrap().category, BmiCategory::Obese);

    clear_bmi_env();
}

#[test]
#[serial]
fn test_unparseable_value_is_an_error() {
    clear_bmi_env();
    env::set_var("BMI_HEIGHT_MAX_CM", "tall");

    let err = BmiConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::Parse(ref msg) if msg.contains("BMI_HEIGHT_MAX_CM")));

    let app_error = AppError::from(err);
    assert_eq!(app_error.code, ErrorCode::ConfigError);
    assert_eq!(app_error.code.exit_code(), 78);

    clear_bmi_env();
}

#[test]
#[serial]
fn test_unknown_profile_is_an_error() {
    clear_bmi_env();
    env::set_var("BMI_THRESHOLD_PROFILE", "asian");
    assert!(matches!(BmiConfig::from_env(), Err(ConfigError::Parse(_))));
    clear_bmi_env();
}

#[test]
#[serial]
fn test_inverted_range_fails_validation() {
    clear_bmi_env();
    env::set_var("BMI_HEIGHT_MIN_CM", "400");

    let config = BmiConfig::from_env().unwrap();
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    assert!(BmiConfig::load().is_err());

    let err = BmiEngine::new(config).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.user_message().contains("height range"));

    clear_bmi_env();
}

#[test]
#[serial]
fn test_zero_cache_capacity_fails_validation() {
    clear_bmi_env();
    env::set_var("BMI_CACHE_CAPACITY", "0");
    assert!(matches!(
        BmiConfig::load(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
    clear_bmi_env();
}

#[test]
#[serial]
fn test_gauge_max_must_exceed_last_threshold() {
    clear_bmi_env();
    env::set_var("BMI_GAUGE_MAX", "30");
    assert!(BmiConfig::load().is_err());

    env::set_var("BMI_GAUGE_MAX", "50");
    assert_eq!(BmiConfig::load().unwrap().gauge_max, 50.0);
    clear_bmi_env();
}

// ============================================================================
// LOGGING CONFIGURATION
// ============================================================================

#[test]
#[serial]
fn test_logging_from_environment() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "bmi-test");

    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(config.include_thread);
    assert_eq!(config.service_name, "bmi-test");

    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
    env::remove_var("SERVICE_NAME");
}

#[test]
#[serial]
fn test_logging_defaults() {
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
    env::remove_var("LOG_INCLUDE_LOCATION");
    env::remove_var("LOG_INCLUDE_THREAD");
    env::remove_var("SERVICE_NAME");

    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.environment, "development");
    assert!(!config.include_location);
    assert_eq!(config.service_name, "bmi-calculator");
}
