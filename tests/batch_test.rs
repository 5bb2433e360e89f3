// ABOUTME: Integration tests for batch summaries
// ABOUTME: Sequential and parallel paths must agree and keep input order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use workout_tracker::batch::{summarize_package, summarize_packages};
use workout_tracker::errors::ErrorCode;
use workout_tracker::models::WorkoutCode;
use workout_tracker::packages::{sample_packages, WorkoutPackage};

fn mixed_packages() -> Vec<WorkoutPackage> {
    let mut packages = Vec::new();
    for index in 0..50_u32 {
        let steps = f64::from(1000 + index * 250);
        packages.push(WorkoutPackage::new(WorkoutCode::Run, [steps, 1.0, 70.0]));
        packages.push(WorkoutPackage::new(
            WorkoutCode::Wlk,
            [steps, 0.5, 65.0, 170.0],
        ));
        packages.push(WorkoutPackage::new(
            WorkoutCode::Swm,
            [steps, 1.0, 80.0, 25.0, f64::from(index)],
        ));
    }
    // Failures in the middle must not disturb neighbours
    packages.insert(10, WorkoutPackage::new(WorkoutCode::Run, [15_000.0, 0.0, 75.0]));
    packages.insert(20, WorkoutPackage::new(WorkoutCode::Swm, [720.0, 1.0]));
    packages
}

#[test]
fn test_sample_batch() {
    let results = summarize_packages(&sample_packages(), false);
    let types: Vec<String> = results
        .into_iter()
        .map(|result| result.unwrap().training_type().to_owned())
        .collect();
    assert_eq!(types, vec!["Swimming", "Running", "SportsWalking"]);
}

#[test]
fn test_parallel_matches_sequential() {
    let packages = mixed_packages();
    let sequential = summarize_packages(&packages, false);
    let parallel = summarize_packages(&packages, true);

    assert_eq!(sequential.len(), packages.len());
    assert_eq!(parallel.len(), packages.len());

    for (index, (left, right)) in sequential.iter().zip(&parallel).enumerate() {
        match (left, right) {
            (Ok(left), Ok(right)) => assert_eq!(left, right, "package {index}"),
            (Err(left), Err(right)) => assert_eq!(left.code, right.code, "package {index}"),
            _ => panic!("package {index}: sequential and parallel disagree"),
        }
    }
}

#[test]
fn test_failures_stay_local() {
    let packages = mixed_packages();
    let results = summarize_packages(&packages, true);

    assert_eq!(
        results[10].as_ref().unwrap_err().code,
        ErrorCode::DivisionByZero
    );
    assert_eq!(
        results[20].as_ref().unwrap_err().code,
        ErrorCode::MissingRequiredField
    );
    let failures = results.iter().filter(|result| result.is_err()).count();
    assert_eq!(failures, 2);

    for (package, result) in packages.iter().zip(&results) {
        if let Ok(info) = result {
            let expected = summarize_package(package).unwrap();
            assert_eq!(info, &expected);
        }
    }
}
