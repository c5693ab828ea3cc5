// ABOUTME: Core types and constants for the BMI calculation and classification engine
// ABOUTME: Foundation crate with error handling, category model, and WHO constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors

#![deny(unsafe_code)]

//! # BMI Core
//!
//! Foundation crate providing shared types and constants for the BMI engine. It
//! changes rarely, so the main crate and the CLI build against a stable base.
//!
//! ## Modules
//!
//! - **errors**: `ErrorCode`, typed `MeasurementError`, boundary `AppError`
//! - **constants**: measurement limits, WHO thresholds, display metadata
//! - **models**: the ordered `BmiCategory` enum

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
