// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, engine builders, float assertions, and env cleanup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `bmi_calculator`

use bmi_calculator::{
    config::{BmiConfig, ThresholdProfile},
    intelligence::BmiEngine,
};
use std::env;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Every environment variable the configuration layer reads
pub const BMI_ENV_VARS: [&str; 10] = [
    "BMI_HEIGHT_MIN_CM",
    "BMI_HEIGHT_MAX_CM",
    "BMI_HEIGHT_DEFAULT_CM",
    "BMI_WEIGHT_MIN_KG",
    "BMI_WEIGHT_MAX_KG",
    "BMI_WEIGHT_DEFAULT_KG",
    "BMI_THRESHOLD_PROFILE",
    "BMI_MAX_REALISTIC",
    "BMI_GAUGE_MAX",
    "BMI_CACHE_CAPACITY",
];

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Engine with default (WHO) configuration
pub fn who_engine() -> BmiEngine {
    init_test_logging();
    BmiEngine::new(BmiConfig::default()).unwrap()
}

/// Engine with the earlier threshold profile
pub fn legacy_engine() -> BmiEngine {
    init_test_logging();
    BmiEngine::new(BmiConfig::with_profile(ThresholdProfile::Legacy)).unwrap()
}

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

/// Remove every `BMI_*` variable so tests start from defaults
pub fn clear_bmi_env() {
    for name in BMI_ENV_VARS {
        env::remove_var(name);
    }
}
