// ABOUTME: Division helpers that turn a zero divisor into a domain error
// ABOUTME: Includes floor division with sign handling for negative operands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};

/// Divide `dividend` by `divisor`, failing instead of producing infinity or NaN
///
/// # Errors
///
/// Returns `ErrorCode::DivisionByZero` naming `divisor_name` if `divisor` is zero
pub fn checked_div(dividend: f64, divisor: f64, divisor_name: &str) -> AppResult<f64> {
    if divisor == 0.0 {
        return Err(AppError::division_by_zero(divisor_name));
    }
    Ok(dividend / divisor)
}

/// Floor division: the quotient rounded toward negative infinity
///
/// The remainder is taken first so that the result matches exact floor
/// semantics even where `(dividend / divisor).floor()` would be off by one
/// from rounding in the intermediate quotient.
///
/// # Errors
///
/// Returns `ErrorCode::DivisionByZero` naming `divisor_name` if `divisor` is zero
pub fn floor_div(dividend: f64, divisor: f64, divisor_name: &str) -> AppResult<f64> {
    if divisor == 0.0 {
        return Err(AppError::division_by_zero(divisor_name));
    }

    let remainder = dividend % divisor;
    let mut quotient = (dividend - remainder) / divisor;
    // `%` keeps the dividend's sign; floor needs the divisor's
    if remainder != 0.0 && (divisor < 0.0) != (remainder < 0.0) {
        quotient -= 1.0;
    }

    if quotient == 0.0 {
        return Ok(0.0_f64.copysign(dividend / divisor));
    }
    let floored = quotient.floor();
    if quotient - floored > 0.5 {
        Ok(floored + 1.0)
    } else {
        Ok(floored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_checked_div() {
        assert!((checked_div(9.75, 1.0, "duration").unwrap() - 9.75).abs() < 1e-12);
        let err = checked_div(9.75, 0.0, "duration").unwrap_err();
        assert_eq!(err.code, ErrorCode::DivisionByZero);
        assert!(err.message.contains("duration"));
    }

    #[test]
    fn test_floor_div_positive() {
        assert!((floor_div(34.2225, 180.0, "height").unwrap()).abs() < f64::EPSILON);
        assert!((floor_div(7.0, 2.0, "x").unwrap() - 3.0).abs() < f64::EPSILON);
        assert!((floor_div(6.0, 2.0, "x").unwrap() - 3.0).abs() < f64::EPSILON);
        assert!((floor_div(400.0, 180.0, "x").unwrap() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_floor_div_rounds_toward_negative_infinity() {
        assert!((floor_div(-7.0, 2.0, "x").unwrap() + 4.0).abs() < f64::EPSILON);
        assert!((floor_div(7.0, -2.0, "x").unwrap() + 4.0).abs() < f64::EPSILON);
        assert!((floor_div(-7.0, -2.0, "x").unwrap() - 3.0).abs() < f64::EPSILON);
        assert!((floor_div(34.2225, -180.0, "x").unwrap() + 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_floor_div_zero_quotient_keeps_sign() {
        let negative_zero = floor_div(-0.0, 5.0, "x").unwrap();
        assert!(negative_zero == 0.0 && negative_zero.is_sign_negative());
        let positive_zero = floor_div(1.0, 5.0, "x").unwrap();
        assert!(positive_zero == 0.0 && positive_zero.is_sign_positive());
    }

    #[test]
    fn test_floor_div_by_zero() {
        let err = floor_div(1.0, 0.0, "height").unwrap_err();
        assert_eq!(err.code, ErrorCode::DivisionByZero);
    }
}
