// ABOUTME: Categories command for bmi-cli
// ABOUTME: Prints the configured category table and gauge bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors

use bmi_calculator::{
    config::ThresholdProfile,
    errors::AppResult,
    intelligence::{BmiEngine, CategoryRecord, GaugeSpec},
};
use serde::Serialize;

use crate::helpers::display::{display_categories, print_json, OutputFormat};

#[derive(Serialize)]
struct CategoryListing<'a> {
    profile: ThresholdProfile,
    categories: Vec<&'a CategoryRecord>,
    gauge: &'a GaugeSpec,
}

/// Print every category with its band and the gauge layout
pub fn run(engine: &BmiEngine, format: OutputFormat) -> AppResult<()> {
    let profile = engine.config().profile;

    match format {
        OutputFormat::Text => {
            display_categories(&profile.to_string(), engine.table(), engine.gauge());
            Ok(())
        }
        OutputFormat::Json => print_json(&CategoryListing {
            profile,
            categories: engine.table().iter().collect(),
            gauge: engine.gauge(),
        }),
    }
}
