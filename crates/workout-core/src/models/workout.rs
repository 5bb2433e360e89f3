// ABOUTME: Workout type code enumeration used by sensor packages
// ABOUTME: Parses the short three-letter tags and reports each variant's argument count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Short tag identifying which training variant a sensor package describes
///
/// Each code maps to exactly one variant and a fixed positional argument
/// layout:
///
/// - `Swm`: Swimming `[action, duration, weight, pool_length, pool_laps]`
/// - `Run`: Running `[action, duration, weight]`
/// - `Wlk`: Sports walking `[action, duration, weight, height]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WorkoutCode {
    /// Swimming
    Swm,
    /// Running
    Run,
    /// Sports walking
    Wlk,
}

impl WorkoutCode {
    /// All known codes, in the order the sample packages use them
    pub const ALL: [Self; 3] = [Self::Swm, Self::Run, Self::Wlk];

    /// Three-letter tag as it appears in sensor packages
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Swm => "SWM",
            Self::Run => "RUN",
            Self::Wlk => "WLK",
        }
    }

    /// Number of positional values a package with this code carries
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Swm => 5,
            Self::Run => 3,
            Self::Wlk => 4,
        }
    }

    /// Names of the positional values, in order
    #[must_use]
    pub const fn field_names(&self) -> &'static [&'static str] {
        match self {
            Self::Swm => &["action", "duration", "weight", "pool_length", "pool_laps"],
            Self::Run => &["action", "duration", "weight"],
            Self::Wlk => &["action", "duration", "weight", "height"],
        }
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutCode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SWM" => Ok(Self::Swm),
            "RUN" => Ok(Self::Run),
            "WLK" => Ok(Self::Wlk),
            _ => Err(AppError::unknown_workout_type(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_parse_known_codes() {
        assert_eq!("SWM".parse::<WorkoutCode>().unwrap(), WorkoutCode::Swm);
        assert_eq!("RUN".parse::<WorkoutCode>().unwrap(), WorkoutCode::Run);
        assert_eq!("wlk".parse::<WorkoutCode>().unwrap(), WorkoutCode::Wlk);
    }

    #[test]
    fn test_unknown_code_is_reported() {
        let err = "ROW".parse::<WorkoutCode>().unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownWorkoutType);
        assert!(err.message.contains("ROW"));
    }

    #[test]
    fn test_arity_matches_field_names() {
        for code in WorkoutCode::ALL {
            assert_eq!(code.arity(), code.field_names().len());
            assert_eq!(code.as_str().parse::<WorkoutCode>().unwrap(), code);
        }
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&WorkoutCode::Wlk).unwrap();
        assert_eq!(json, "\"WLK\"");
    }
}
