// ABOUTME: Re-exports command modules for bmi-cli
// ABOUTME: Provides access to calculate, classify, categories, and batch commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors

pub mod batch;
pub mod calculate;
pub mod categories;
pub mod classify;
