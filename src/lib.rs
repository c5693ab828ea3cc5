// ABOUTME: Main library entry point for the BMI calculator engine
// ABOUTME: Exposes configuration, logging, and the validation/calculation/classification engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors

#![deny(unsafe_code)]

//! # BMI Calculator
//!
//! Computes Body Mass Index from height and weight, classifies it into one of
//! four WHO weight categories, and assembles a report with gauge data, tips, and
//! a medical disclaimer.
//!
//! ## Architecture
//!
//! - **Config**: explicit, validated [`config::BmiConfig`] loaded from `BMI_*`
//!   environment variables
//! - **Intelligence**: validator, calculator, classifier, gauge, assessment, cache
//! - **Errors**: typed [`errors::MeasurementError`] inside the engine,
//!   [`errors::AppError`] at the boundary
//!
//! ## Example Usage
//!
//! ```rust
//! use bmi_calculator::config::BmiConfig;
//! use bmi_calculator::errors::AppResult;
//! use bmi_calculator::intelligence::BmiEngine;
//!
//! fn main() -> AppResult<()> {
//!     let engine = BmiEngine::new(BmiConfig::default())?;
//!     let report = engine.assess(170.0, 70.0)?;
//!     assert_eq!(report.bmi_display, "24.2");
//!     assert_eq!(report.category.name, "Normal weight");
//!     Ok(())
//! }
//! ```

/// Engine configuration
pub mod config;

/// Error types shared with `bmi-core`
pub mod errors;

/// BMI engine
pub mod intelligence;

/// Structured logging setup
pub mod logging;

pub use bmi_core::constants;
pub use bmi_core::models;
