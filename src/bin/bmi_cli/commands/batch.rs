// ABOUTME: Batch command for bmi-cli
// ABOUTME: Assesses "height weight" lines from a reader through the LRU assessment cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors

use bmi_calculator::{
    errors::{AppError, AppResult, ErrorResponse},
    intelligence::{AssessmentCache, BmiEngine},
};
use serde_json::json;
use std::io::BufRead;
use tracing::{debug, warn};

use crate::helpers::display::OutputFormat;

/// Assess each non-empty line of `input`
///
/// Lines that fail are reported inline with their line number and processing
/// continues; the command fails at the end if any line failed.
pub fn run(engine: &BmiEngine, input: impl BufRead, format: OutputFormat) -> AppResult<()> {
    let mut cache = AssessmentCache::for_engine(engine);
    let mut failures = 0_usize;

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|e| AppError::internal(format!("Failed to read stdin: {e}")))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let result = parse_pair(trimmed)
            .and_then(|(height, weight)| cache.assess(engine, height, weight))
            .map_err(|e| e.with_details(json!({ "line": line_no })));

        match (result, format) {
            (Ok(a), OutputFormat::Text) => println!(
                "{:.1} cm, {:.1} kg: BMI {} {} {}",
                a.height_cm, a.weight_kg, a.bmi_display, a.category.emoji, a.category.name
            ),
            (Ok(a), OutputFormat::Json) => println!(
                "{}",
                json!({
                    "line": line_no,
                    "height_cm": a.height_cm,
                    "weight_kg": a.weight_kg,
                    "bmi": a.bmi,
                    "bmi_display": a.bmi_display,
                    "category": a.category.category,
                })
            ),
            (Err(e), OutputFormat::Text) => {
                failures += 1;
                warn!(line = line_no, "Batch line rejected: {e}");
                println!("line {line_no}: Error: {}", e.user_message());
            }
            (Err(e), OutputFormat::Json) => {
                failures += 1;
                warn!(line = line_no, "Batch line rejected: {e}");
                println!("{}", serde_json::to_string(&ErrorResponse::from(e))?);
            }
        }
    }

    let stats = cache.stats();
    debug!(
        hits = stats.hits,
        misses = stats.misses,
        entries = stats.len,
        "Batch cache statistics"
    );

    if failures > 0 {
        return Err(AppError::invalid_input(format!(
            "{failures} batch line(s) could not be assessed"
        )));
    }
    Ok(())
}

fn parse_pair(line: &str) -> AppResult<(f64, f64)> {
    let mut fields = line.split(|c: char| c.is_whitespace() || c == ',').filter(|f| !f.is_empty());
    let (Some(height), Some(weight), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(AppError::invalid_input(format!(
            "Expected \"<height_cm> <weight_kg>\", got \"{line}\""
        )));
    };
    let parse = |field: &str| {
        field
            .parse::<f64>()
            .map_err(|_| AppError::invalid_input(format!("\"{field}\" is not a number")))
    };
    Ok((parse(height)?, parse(weight)?))
}
