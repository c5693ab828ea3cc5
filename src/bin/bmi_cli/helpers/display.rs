// ABOUTME: Output formatting helpers for bmi-cli
// ABOUTME: Renders assessments, category tables, gauge bars, and errors as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors

use bmi_calculator::{
    constants::display::{APP_TITLE, MEDICAL_DISCLAIMER},
    errors::{AppError, AppResult, ErrorResponse, ErrorResponseDetails},
    intelligence::{BmiAssessment, CategoryRecord, GaugeSpec},
    models::BmiCategory,
};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use tracing::error;

/// Width of the text gauge in characters
const GAUGE_WIDTH: usize = 40;

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Print any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display a full assessment
pub fn display_assessment(assessment: &BmiAssessment, gauge: &GaugeSpec) {
    let category = &assessment.category;

    println!("\n{APP_TITLE}");
    println!("{}", "=".repeat(60));
    println!(
        "   Height: {:.1} cm   Weight: {:.1} kg",
        assessment.height_cm, assessment.weight_kg
    );
    println!("   Your BMI: {}", assessment.bmi_display);
    println!(
        "   {} {}: {}",
        category.emoji, category.name, category.description
    );
    if !assessment.realistic {
        println!("   Note: this BMI is outside the realistic range; please check your inputs.");
    }

    println!();
    display_gauge(gauge, Some(assessment.gauge_position));

    println!("\nTips for {}:", category.name);
    println!("{}", category.tips);

    println!("\n{MEDICAL_DISCLAIMER}");
}

/// Display a single classification
pub fn display_classification(bmi_display: &str, record: &CategoryRecord) {
    println!("BMI {bmi_display}: {} {}", record.emoji, record.name);
    println!("   {}", record.description);
    println!("\n{}", record.tips);
}

/// Display the category table
pub fn display_categories<'a>(
    profile: &str,
    records: impl IntoIterator<Item = &'a CategoryRecord>,
    gauge: &GaugeSpec,
) {
    println!("\nBMI categories ({profile} thresholds)");
    println!("{}", "=".repeat(60));
    let mut lower = 0.0;
    for record in records {
        let range = if record.upper_threshold.is_finite() {
            format!("{lower:>5.1} - <{:<5.1}", record.upper_threshold)
        } else {
            format!("{lower:>5.1} and above")
        };
        println!(
            "   {} {:<14} {range:<16} {}  {}",
            record.emoji, record.name, record.color, record.description
        );
        lower = record.upper_threshold;
    }
    println!();
    display_gauge(gauge, None);
}

/// Display a text gauge, optionally with a needle
pub fn display_gauge(gauge: &GaugeSpec, needle: Option<f64>) {
    println!("   {}", gauge_bar(gauge));
    if let Some(position) = needle {
        println!("   {}^ {position:.1}", " ".repeat(gauge_column(gauge, position)));
    }
    println!("   0{}{:.0}", " ".repeat(GAUGE_WIDTH.saturating_sub(3)), gauge.max);
    println!("   {}", gauge_legend());
}

fn gauge_bar(gauge: &GaugeSpec) -> String {
    (0..GAUGE_WIDTH)
        .map(|column| {
            let value = (column as f64 + 0.5) * gauge.max / GAUGE_WIDTH as f64;
            gauge
                .band_at(value)
                .map_or(' ', |band| band_char(band.category))
        })
        .collect()
}

const fn band_char(category: BmiCategory) -> char {
    match category {
        BmiCategory::Underweight => '-',
        BmiCategory::Normal => '=',
        BmiCategory::Overweight => '+',
        BmiCategory::Obese => '#',
    }
}

fn gauge_legend() -> String {
    BmiCategory::ALL
        .iter()
        .map(|c| format!("{} {}", band_char(*c), c.name()))
        .collect::<Vec<_>>()
        .join("   ")
}

fn gauge_column(gauge: &GaugeSpec, position: f64) -> usize {
    if gauge.max <= 0.0 {
        return 0;
    }
    let column = (position / gauge.max * GAUGE_WIDTH as f64).floor() as usize;
    column.min(GAUGE_WIDTH - 1)
}

/// Report an error on the channel matching `format`
///
/// JSON errors are a single line on stdout. Internal errors show a generic
/// message and the detail goes to the log.
pub fn report_error(app_error: &AppError, format: OutputFormat) {
    if app_error.code.is_internal() {
        error!(code = ?app_error.code, "Command failed: {app_error}");
    }

    match format {
        OutputFormat::Text => eprintln!("Error: {}", app_error.user_message()),
        OutputFormat::Json => {
            let response = ErrorResponse {
                error: ErrorResponseDetails {
                    code: app_error.code,
                    message: app_error.user_message(),
                    field: app_error.context.field,
                    details: if app_error.code.is_internal() {
                        serde_json::Value::Null
                    } else {
                        app_error.context.details.clone()
                    },
                },
            };
            match serde_json::to_string(&response) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("Error: {} ({e})", app_error.user_message()),
            }
        }
    }
}
