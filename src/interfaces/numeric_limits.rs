// ============================================================================
// Numeric Limits Interface
// Compile-time properties and boundary values of a number type
// ============================================================================

use crate::numeric::{DecFloat, MAX_EXP10, MIN_EXP10};

/// Properties of a floating-point type, in the spirit of `std::numeric_limits`.
pub trait NumericLimits: Sized {
    /// Significant digits in `RADIX`
    const DIGITS: u32;
    /// Decimal digits guaranteed to survive a text round trip
    const DIGITS10: u32;
    /// Decimal digits needed to render every stored digit
    const MAX_DIGITS10: u32;
    const MIN_EXPONENT: i32;
    const MAX_EXPONENT: i32;
    const MIN_EXPONENT10: i32;
    const MAX_EXPONENT10: i32;
    const RADIX: u32;
    const HAS_INFINITY: bool;
    const HAS_QUIET_NAN: bool;
    const IS_EXACT: bool;
    const IS_BOUNDED: bool;

    /// Smallest positive normal value
    fn min_positive() -> Self;
    fn max_value() -> Self;
    /// Most negative finite value
    fn lowest() -> Self;
    /// Distance from one to the next representable value at `DIGITS10`
    fn epsilon() -> Self;
    fn infinity() -> Self;
    fn quiet_nan() -> Self;
    fn round_error() -> Self;
    /// Smallest positive subnormal, or zero without subnormals
    fn denorm_min() -> Self;
}

impl<const D: u32, const L: usize> NumericLimits for DecFloat<D, L> {
    const DIGITS: u32 = Self::DIGITS10;
    const DIGITS10: u32 = Self::DIGITS10;
    const MAX_DIGITS10: u32 = Self::TOTAL_DIGITS10;
    const MIN_EXPONENT: i32 = MIN_EXP10;
    const MAX_EXPONENT: i32 = MAX_EXP10;
    const MIN_EXPONENT10: i32 = MIN_EXP10;
    const MAX_EXPONENT10: i32 = MAX_EXP10;
    const RADIX: u32 = 10;
    const HAS_INFINITY: bool = true;
    const HAS_QUIET_NAN: bool = true;
    const IS_EXACT: bool = false;
    const IS_BOUNDED: bool = true;

    fn min_positive() -> Self {
        Self::MIN
    }

    fn max_value() -> Self {
        Self::MAX
    }

    fn lowest() -> Self {
        -Self::MAX
    }

    fn epsilon() -> Self {
        Self::EPSILON
    }

    fn infinity() -> Self {
        Self::INFINITY
    }

    fn quiet_nan() -> Self {
        Self::NAN
    }

    fn round_error() -> Self {
        Self::HALF
    }

    fn denorm_min() -> Self {
        Self::ZERO
    }
}
