// ABOUTME: Calculate command for bmi-cli
// ABOUTME: Runs a full assessment for one height/weight pair and prints it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors

use bmi_calculator::{errors::AppResult, intelligence::BmiEngine};
use tracing::info;

use crate::helpers::display::{display_assessment, print_json, OutputFormat};

/// Assess `height` and `weight` and print the report
pub fn run(engine: &BmiEngine, height: f64, weight: f64, format: OutputFormat) -> AppResult<()> {
    let assessment = engine.assess(height, weight)?;
    info!(
        bmi = assessment.bmi,
        category = %assessment.category.category.key(),
        "Assessment complete"
    );

    match format {
        OutputFormat::Text => {
            display_assessment(&assessment, engine.gauge());
            Ok(())
        }
        OutputFormat::Json => print_json(&assessment),
    }
}
