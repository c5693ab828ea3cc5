// ABOUTME: BMI CLI - command-line front end for the BMI calculation and classification engine
// ABOUTME: Collects height and weight, prints BMI, category, tips, gauge bands, and the disclaimer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors
//!
//! Usage:
//! ```bash
//! # Assess a height/weight pair
//! bmi-cli calculate --height 170 --weight 70
//!
//! # Same, as JSON
//! bmi-cli calculate --height 170 --weight 70 --format json
//!
//! # Classify a BMI value directly
//! bmi-cli classify 27.5
//!
//! # Show the category table and gauge bands with the earlier thresholds
//! bmi-cli --thresholds legacy categories
//!
//! # Assess "height weight" lines from stdin
//! printf '170 70\n180 55\n' | bmi-cli batch
//! ```

mod commands;
mod helpers;

use bmi_calculator::{
    config::{BmiConfig, ThresholdProfile},
    errors::{AppError, AppResult},
    intelligence::BmiEngine,
    logging::LoggingConfig,
};
use clap::{Parser, Subcommand};
use helpers::display::{report_error, OutputFormat};
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "bmi-cli",
    version,
    about = "Body Mass Index calculator",
    long_about = "Computes BMI from height and weight and classifies it into WHO weight categories."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Threshold profile override (defaults to BMI_THRESHOLD_PROFILE, then who)
    #[arg(long, global = true)]
    thresholds: Option<ThresholdProfile>,

    /// Output format
    #[arg(long, short = 'f', global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate and classify BMI from height and weight
    Calculate {
        /// Height in centimeters (defaults to the configured default height)
        #[arg(long, allow_negative_numbers = true)]
        height: Option<f64>,

        /// Weight in kilograms (defaults to the configured default weight)
        #[arg(long, allow_negative_numbers = true)]
        weight: Option<f64>,
    },

    /// Classify a BMI value
    Classify {
        /// BMI value
        #[arg(allow_negative_numbers = true)]
        bmi: f64,
    },

    /// Show the category table and gauge bands
    Categories,

    /// Assess whitespace-separated "height weight" lines read from stdin
    Batch,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.verbose();
    }
    if let Err(e) = logging.init() {
        let error = AppError::from(e);
        match error.context.details["source"].as_str() {
            Some(source) => eprintln!("Warning: logging disabled: {} ({source})", error.message),
            None => eprintln!("Warning: logging disabled: {}", error.message),
        }
    }

    match run(cli.command, cli.thresholds, cli.format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let code = error.code.exit_code();
            report_error(&error, cli.format);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(
    command: Command,
    thresholds: Option<ThresholdProfile>,
    format: OutputFormat,
) -> AppResult<()> {
    let engine = build_engine(thresholds)?;
    debug!(profile = %engine.config().profile, "Engine configured");

    match command {
        Command::Calculate { height, weight } => {
            let height = height.unwrap_or(engine.config().height.default);
            let weight = weight.unwrap_or(engine.config().weight.default);
            commands::calculate::run(&engine, height, weight, format)
        }
        Command::Classify { bmi } => commands::classify::run(&engine, bmi, format),
        Command::Categories => commands::categories::run(&engine, format),
        Command::Batch => commands::batch::run(&engine, std::io::stdin().lock(), format),
    }
}

fn build_engine(thresholds: Option<ThresholdProfile>) -> AppResult<BmiEngine> {
    let mut config = BmiConfig::from_env().map_err(AppError::from)?;
    if let Some(profile) = thresholds {
        config = config.apply_profile(profile);
    }
    BmiEngine::new(config)
}
