// ABOUTME: Error handling re-exports for the BMI calculator crate
// ABOUTME: Surfaces bmi-core error types under crate::errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors

//! # Unified Error Handling
//!
//! The error system lives in `bmi-core` so that it can be shared with other
//! front ends; this module re-exports it together with [`ConfigError`].

pub use crate::config::error::ConfigError;
pub use bmi_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse, ErrorResponseDetails,
    Measurement, MeasurementError,
};
