// ABOUTME: Command-line driver printing one summary line per workout package
// ABOUTME: Uses the built-in sample packages unless packages are given on the command line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Usage:
//! ```bash
//! # Summarize the sample swim, run and walk
//! workout-report
//!
//! # Summarize custom packages as JSON
//! workout-report --package RUN:15000,1,75 --package WLK:9000,1,75,180 --format json
//!
//! # Russian labels, computed in parallel
//! workout-report --locale ru --parallel
//! ```

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{info, warn};
use workout_tracker::{
    batch::summarize_packages,
    errors::AppError,
    config::ReportConfig,
    formatters::{format_error, format_message, MessageLocale, OutputFormat},
    packages::{sample_packages, WorkoutPackage},
};

#[derive(Parser)]
#[command(
    name = "workout-report",
    about = "Workout statistics report",
    long_about = "Computes distance, mean speed and calories for each workout package and prints one summary per line."
)]
struct Cli {
    /// Workout package as CODE:v1,v2,... (repeatable; defaults to the samples)
    #[arg(long = "package", short = 'p', value_name = "CODE:VALUES")]
    packages: Vec<WorkoutPackage>,

    /// Output format override (text, json, json-pretty)
    #[arg(long)]
    format: Option<String>,

    /// Label language override (en, ru)
    #[arg(long)]
    locale: Option<String>,

    /// Compute summaries in parallel
    #[arg(long)]
    parallel: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("workout-report: {error:#}");
            error
                .downcast_ref::<AppError>()
                .map_or(ExitCode::FAILURE, |app_error| {
                    ExitCode::from(app_error.exit_code())
                })
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = ReportConfig::from_env()?;
    if let Some(format) = cli.format.as_deref() {
        config.output_format = OutputFormat::from_str_param(format);
    }
    if let Some(locale) = cli.locale.as_deref() {
        config.locale = MessageLocale::from_str_or_default(locale);
    }
    config.parallel |= cli.parallel;
    if cli.verbose {
        config.logging.level = "debug".into();
    }

    config.logging.init()?;
    config.log_summary();

    let packages = if cli.packages.is_empty() {
        sample_packages()
    } else {
        cli.packages
    };
    info!(count = packages.len(), "Generating workout report");

    let results = summarize_packages(&packages, config.parallel);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut exit_code = ExitCode::SUCCESS;
    for (package, result) in packages.iter().zip(results) {
        match result {
            Ok(message) => {
                writeln!(
                    out,
                    "{}",
                    format_message(&message, config.output_format, config.locale)?
                )?;
            }
            Err(error) => {
                warn!(package = %package, "Reporting failed workout package");
                writeln!(out, "{}", format_error(&error, config.output_format)?)?;
                exit_code = ExitCode::from(error.exit_code());
            }
        }
    }
    out.flush()?;

    info!("Workout report complete");
    Ok(exit_code)
}
