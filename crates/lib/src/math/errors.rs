//! Error types for the implicit-rounding helpers.

use thiserror::Error;

/// Structured error types for arithmetic helpers.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    /// The divisor rounds to zero
    #[error("Division by zero: {dividend} \\ {divisor} (divisor rounds to 0)")]
    DivideByZero { dividend: f64, divisor: f64 },

    /// The result is NaN, infinite, or does not fit in an `i32`
    #[error("Value {value} is not representable as a 32-bit integer")]
    NotRepresentable { value: f64 },
}

impl MathError {
    /// Check if this error is a division by zero
    pub fn is_divide_by_zero(&self) -> bool {
        matches!(self, MathError::DivideByZero { .. })
    }

    /// Check if this error is an overflow
    pub fn is_overflow(&self) -> bool {
        matches!(self, MathError::NotRepresentable { .. })
    }
}

// Conversion from MathError to the main Error type
impl From<MathError> for crate::Error {
    fn from(err: MathError) -> Self {
        crate::Error::Math(err)
    }
}
