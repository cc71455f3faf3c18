// ABOUTME: Workout tracker CLI - summarizes a batch of tracker sensor packages
// ABOUTME: Prints one report line per package, warnings for unknown workout codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Summarize the built-in sample batch
//! workout-tracker
//!
//! # Summarize a JSON batch in English
//! workout-tracker --input batch.json --locale en
//!
//! # Emit JSON records
//! workout-tracker --input batch.json --format json
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use workout_tracker::config::TrackerConfig;
use workout_tracker::errors::{AppError, AppResult, ErrorResponse};
use workout_tracker::formatters::{OutputFormat, ReportLocale};
use workout_tracker::models::SensorPackage;
use workout_tracker::services::{load_packages, WorkoutBatchProcessor};

#[derive(Parser)]
#[command(
    name = "workout-tracker",
    version,
    about = "Summarize fitness tracker workouts",
    long_about = "Reads tracker sensor packages and prints distance, mean speed, and calories for each workout."
)]
struct Cli {
    /// JSON file with an array of {"code": ..., "data": [...]} packages (default: built-in sample)
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// Report language: ru or en (overrides WORKOUT_REPORT_LOCALE)
    #[arg(long, value_parser = parse_locale)]
    locale: Option<ReportLocale>,

    /// Output format: text or json (overrides WORKOUT_OUTPUT_FORMAT)
    #[arg(long, value_parser = parse_format)]
    format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn parse_locale(value: &str) -> Result<ReportLocale, String> {
    ReportLocale::from_str_param(value).map_err(|e| e.message)
}

fn parse_format(value: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_str_param(value).map_err(|e| e.message)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match TrackerConfig::from_env() {
        Ok(config) => apply_overrides(&cli, config),
        Err(e) => return fail(e, cli.format.unwrap_or_default()),
    };
    let error_format = config.output_format;

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(e, error_format),
    }
}

/// Apply command-line overrides on top of the environment configuration
fn apply_overrides(cli: &Cli, mut config: TrackerConfig) -> TrackerConfig {
    if let Some(locale) = cli.locale {
        config.report_locale = locale;
    }
    if let Some(format) = cli.format {
        config.output_format = format;
    }
    if cli.verbose {
        config.logging = config.logging.verbose();
    }
    config
}

fn fail(e: AppError, format: OutputFormat) -> ExitCode {
    error!(error.code = ?e.code, "Workout batch failed: {e}");
    let status = e.code.exit_status();
    eprintln!("{}", render_error(e, format));
    ExitCode::from(u8::try_from(status).unwrap_or(1))
}

fn render_error(e: AppError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            let response = ErrorResponse::from(e);
            serde_json::to_string(&response).unwrap_or_else(|_| response.error.message)
        }
        OutputFormat::Text => format!("Error: {e}"),
    }
}

fn run(cli: &Cli, config: &TrackerConfig) -> AppResult<()> {
    config
        .logging
        .init()
        .map_err(|e| AppError::config(e.to_string()))?;
    config.log_loaded();

    let packages = match &cli.input {
        Some(path) => load_packages(path)?,
        None => SensorPackage::sample_batch(),
    };

    let summary = WorkoutBatchProcessor::process(&packages)?;
    let lines = summary.render(&config.reporter())?;

    let mut stdout = io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{line}")
            .map_err(|e| AppError::storage(format!("Cannot write report: {e}")))?;
    }
    Ok(())
}
