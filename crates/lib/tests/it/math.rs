//! Implicit-rounding helper tests

use crate::helpers::*;
use vbcompat::constants::LEGACY_ROUNDING;
use vbcompat::math::{self, MidpointRounding};

#[test]
fn test_integer_division_rounds_operands_first() {
    // round(7.6) = 8, round(2.4) = 2, 8 \ 2 = 4
    assert_eq!(math::integer_division(7.6, 2.4).unwrap(), 4);
    // round(9.5) = 10, round(3.5) = 4, 10 \ 4 = 2
    assert_eq!(math::integer_division(9.5, 3.5).unwrap(), 2);
}

#[test]
fn test_integer_division_by_rounded_zero() {
    let err = expect_math_error(math::integer_division(10.0, -0.3));
    assert!(err.is_divide_by_zero());

    let crate_err: vbcompat::Error = err.into();
    assert_eq!(crate_err.module(), "math");
    assert!(!crate_err.is_out_of_range());
}

#[test]
fn test_divide_pins_half_to_even() {
    assert_eq!(LEGACY_ROUNDING, MidpointRounding::ToEven);
    assert_eq!(math::divide(7.0, 2.0).unwrap(), 4);
    assert_eq!(math::divide(9.0, 2.0).unwrap(), 4);
    assert_eq!(math::divide(11.0, 2.0).unwrap(), 6);
    assert_eq!(math::divide(10.0, 4.0).unwrap(), 2);
}

#[test]
fn test_multiply() {
    assert_eq!(math::multiply(2.5, 2.0).unwrap(), 5);
    assert_eq!(math::multiply(1.5, 3.0).unwrap(), 4);
    assert_eq!(math::multiply(0.25, 2.0).unwrap(), 0);
}

#[test]
fn test_results_outside_i32_fail() {
    assert!(expect_math_error(math::multiply(f64::from(i32::MAX), 2.0)).is_overflow());
    assert!(expect_math_error(math::divide(5.0, 0.0)).is_overflow());

    let crate_err: vbcompat::Error = expect_math_error(math::divide(f64::NAN, 1.0)).into();
    assert!(crate_err.is_out_of_range());
}

#[test]
fn test_round_to_i32_with_explicit_mode() {
    assert_eq!(
        math::round_to_i32(4.5, MidpointRounding::AwayFromZero).unwrap(),
        5
    );
    assert_eq!(math::round_to_i32(4.5, MidpointRounding::ToEven).unwrap(), 4);
}
