// ABOUTME: Classify command for bmi-cli
// ABOUTME: Maps a BMI value to its category record and prints it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors

use bmi_calculator::{
    errors::AppResult,
    intelligence::{format_bmi, BmiEngine, CategoryRecord},
};
use serde::Serialize;

use crate::helpers::display::{display_classification, print_json, OutputFormat};

#[derive(Serialize)]
struct Classification<'a> {
    bmi: f64,
    bmi_display: String,
    category: &'a CategoryRecord,
}

/// Classify `bmi` and print the matching category
pub fn run(engine: &BmiEngine, bmi: f64, format: OutputFormat) -> AppResult<()> {
    let record = engine.classify(bmi)?;
    let bmi_display = format_bmi(bmi);

    match format {
        OutputFormat::Text => {
            display_classification(&bmi_display, record);
            Ok(())
        }
        OutputFormat::Json => print_json(&Classification {
            bmi,
            bmi_display,
            category: record,
        }),
    }
}
