// ============================================================================
// Numeric Errors
// Error types for decimal floating-point parsing and scaling
// ============================================================================

use std::fmt;

/// Errors reported by the decimal backend.
///
/// Arithmetic never fails: overflow, underflow and division by zero are
/// folded into the value class (infinity, zero, NaN). Only the operations
/// below surface an error to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string is not a decimal literal
    InvalidInput,
    /// Exponent suffix of a decimal literal is malformed
    InvalidExponent,
    /// Operand outside the domain of the function (e.g. sqrt of a negative)
    DomainError,
    /// Scaling exponent does not fit the exponent storage type
    ExponentOutOfRange,
    /// Value is infinite or NaN where a finite value is required
    NotFinite,
    /// Value does not fit the target type
    Overflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::InvalidExponent => {
                write!(f, "invalid exponent: could not parse exponent suffix")
            },
            NumericError::DomainError => write!(f, "domain error: argument outside function domain"),
            NumericError::ExponentOutOfRange => write!(
                f,
                "exponent out of range: scaling exponent exceeds exponent type"
            ),
            NumericError::NotFinite => write!(f, "value is not finite"),
            NumericError::Overflow => {
                write!(f, "overflow: value does not fit the target type")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
