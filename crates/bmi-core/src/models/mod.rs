// ABOUTME: Core data models for the BMI engine
// ABOUTME: Re-exports the ordered BMI category enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors

/// WHO weight categories
pub mod category;

pub use category::BmiCategory;
