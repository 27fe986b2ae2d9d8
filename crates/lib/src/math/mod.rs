//! Implicit rounding of real-valued arithmetic into whole numbers.
//!
//! The legacy runtime evaluates `a / b` and `a * b` as real numbers and rounds silently when the
//! result is stored in an `Integer` variable; its `\` operator rounds both operands first and then
//! truncates. Ported code that relies on this has to ask for it explicitly, through the helpers in
//! this module.
//!
//! All three helpers round half to even ([`LEGACY_ROUNDING`]): `2.5` becomes `2`, `3.5` becomes
//! `4`. These are not general-purpose math utilities; use them only where the original code stored
//! a real-valued expression into a whole-number variable.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::constants::LEGACY_ROUNDING;

pub mod errors;

pub use errors::MathError;

/// Rule for rounding a value that lies exactly halfway between two integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MidpointRounding {
    /// Round half to even (banker's rounding)
    ///
    /// The rule used by the legacy runtime's implicit conversions, and by the helpers
    /// in this module.
    #[default]
    ToEven,

    /// Round half away from zero
    AwayFromZero,
}

impl MidpointRounding {
    /// Rounds `value` to the nearest integer, resolving midpoints with this rule.
    ///
    /// ```
    /// use vbcompat::math::MidpointRounding;
    ///
    /// assert_eq!(MidpointRounding::ToEven.round(2.5), 2.0);
    /// assert_eq!(MidpointRounding::AwayFromZero.round(2.5), 3.0);
    /// ```
    pub fn round(self, value: f64) -> f64 {
        match self {
            MidpointRounding::ToEven => value.round_ties_even(),
            MidpointRounding::AwayFromZero => value.round(),
        }
    }
}

/// Rounds `value` with `mode` and narrows it to an `i32`.
///
/// # Errors
/// [`MathError::NotRepresentable`] if `value` is NaN or infinite, or rounds outside `i32`.
pub fn round_to_i32(value: f64, mode: MidpointRounding) -> Result<i32> {
    let rounded = mode.round(value);
    if !rounded.is_finite() || rounded < f64::from(i32::MIN) || rounded > f64::from(i32::MAX) {
        return Err(MathError::NotRepresentable { value }.into());
    }
    Ok(rounded as i32)
}

/// Integer division (`\`): rounds both operands, then divides truncating toward zero.
///
/// ```
/// assert_eq!(vbcompat::math::integer_division(7.6, 2.4)?, 4);
/// # Ok::<(), vbcompat::Error>(())
/// ```
///
/// # Errors
/// - [`MathError::DivideByZero`] if `divisor` rounds to zero.
/// - [`MathError::NotRepresentable`] if an operand or the quotient does not fit in an `i32`.
pub fn integer_division(dividend: f64, divisor: f64) -> Result<i32> {
    let a = round_to_i32(dividend, LEGACY_ROUNDING)?;
    let b = round_to_i32(divisor, LEGACY_ROUNDING)?;
    if b == 0 {
        return Err(MathError::DivideByZero { dividend, divisor }.into());
    }
    a.checked_div(b).ok_or_else(|| {
        MathError::NotRepresentable {
            value: f64::from(a) / f64::from(b),
        }
        .into()
    })
}

/// Real division stored into a whole number: `a / b`, rounded half to even.
///
/// # Errors
/// [`MathError::NotRepresentable`] if the quotient is NaN or infinite (including division
/// by zero), or does not fit in an `i32`.
pub fn divide(dividend: f64, divisor: f64) -> Result<i32> {
    round_to_i32(dividend / divisor, LEGACY_ROUNDING)
}

/// Real multiplication stored into a whole number: `a * b`, rounded half to even.
///
/// # Errors
/// [`MathError::NotRepresentable`] if the product is NaN or infinite, or does not fit in an `i32`.
pub fn multiply(multiplier: f64, multiplicand: f64) -> Result<i32> {
    round_to_i32(multiplier * multiplicand, LEGACY_ROUNDING)
}
