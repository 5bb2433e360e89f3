// ABOUTME: Summarizes many workout packages at once, optionally in parallel
// ABOUTME: Results keep input order and one failing package never affects the others
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use crate::formatters::InfoMessage;
use crate::packages::WorkoutPackage;
use rayon::prelude::*;
use tracing::{debug, warn};

/// Dispatch one package and compute its summary
///
/// # Errors
///
/// Returns the dispatch error for a malformed package or the calculation
/// error for a degenerate one
pub fn summarize_package(package: &WorkoutPackage) -> AppResult<InfoMessage> {
    let result = package.read().and_then(|training| training.show_training_info());
    if let Err(ref error) = result {
        warn!(
            workout = %package.code,
            error.code = ?error.code,
            error.message = %error.message,
            "Workout package could not be summarized"
        );
    }
    result
}

/// Summarize every package, returning one result per package in input order
///
/// Each computation reads only its own package, so the parallel path needs no
/// locking.
#[must_use]
pub fn summarize_packages(
    packages: &[WorkoutPackage],
    parallel: bool,
) -> Vec<AppResult<InfoMessage>> {
    debug!(count = packages.len(), parallel, "Summarizing workout packages");

    if parallel {
        packages.par_iter().map(summarize_package).collect()
    } else {
        packages.iter().map(summarize_package).collect()
    }
}
